//! Process-wide, init-once value holder.
//!
//! The construction guard is an atomic tri-state (`Empty`, `Constructing`,
//! `Ready`) layered over a `OnceLock`. The `OnceLock` provides the actual
//! mutual exclusion for the first construction; the tri-state makes the
//! lifecycle observable, so a competing construction attempt fails with a
//! typed error instead of racing.

use serde_json::Value;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{OnceLock, RwLock};
use thiserror::Error;
use tracing::debug;

const EMPTY: u8 = 0;
const CONSTRUCTING: u8 = 1;
const READY: u8 = 2;

/// The observable lifecycle of a [`SingletonCell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// No value, no construction in progress.
    Empty,
    /// A construction attempt is underway.
    Constructing,
    /// The value exists.
    Ready,
}

impl CellState {
    fn from_u8(state: u8) -> Self {
        match state {
            EMPTY => CellState::Empty,
            CONSTRUCTING => CellState::Constructing,
            _ => CellState::Ready,
        }
    }
}

/// An init-once container whose construction lifecycle can be observed.
///
/// Only transitions `Empty -> Constructing -> Ready` are possible; once
/// `Ready`, the stored value lives until process teardown.
#[derive(Debug)]
pub struct SingletonCell<T> {
    state: AtomicU8,
    slot: OnceLock<T>,
}

impl<T> SingletonCell<T> {
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(EMPTY),
            slot: OnceLock::new(),
        }
    }

    /// The current lifecycle state.
    pub fn state(&self) -> CellState {
        CellState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// The stored value, if construction has completed.
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Lazy accessor: the first caller constructs the value, every later
    /// caller gets the existing one and its `init` closure is dropped
    /// without running.
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        let value = self.slot.get_or_init(|| {
            self.state.store(CONSTRUCTING, Ordering::Release);
            init()
        });
        self.state.store(READY, Ordering::Release);
        value
    }

    /// Strict construction: succeeds only if this call performed the
    /// initialization. Fails with the observed lifecycle state when a value
    /// already exists or another construction is underway.
    pub fn try_init(&self, init: impl FnOnce() -> T) -> Result<&T, CellState> {
        match self
            .state
            .compare_exchange(EMPTY, CONSTRUCTING, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => {
                let mut ran = false;
                let value = self.slot.get_or_init(|| {
                    ran = true;
                    init()
                });
                self.state.store(READY, Ordering::Release);
                // A concurrent `get_or_init` may have won the slot despite
                // our state transition; that still counts as a lost race.
                if ran {
                    Ok(value)
                } else {
                    Err(CellState::Ready)
                }
            }
            Err(observed) => Err(CellState::from_u8(observed)),
        }
    }
}

impl<T> Default for SingletonCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Raised when a holder is constructed outside the accessor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HolderError {
    #[error("a holder already exists; use Holder::instance() instead of constructing one")]
    AlreadyInitialized,
    #[error("holder construction is already in progress; use Holder::instance() instead")]
    InitInProgress,
}

static HOLDER: SingletonCell<Holder> = SingletonCell::new();

/// The single process-wide record wrapping one arbitrary value.
///
/// At most one `Holder` exists per process once created, and it is never
/// torn down before process exit. The held value stays mutable through any
/// reference returned by [`Holder::instance`].
#[derive(Debug)]
pub struct Holder {
    value: RwLock<Value>,
}

impl Holder {
    fn with_value(value: Value) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// The global accessor.
    ///
    /// The first call constructs the holder with `initial` (`Null` when
    /// absent); every later call returns the same reference and silently
    /// discards its argument.
    pub fn instance(initial: Option<Value>) -> &'static Holder {
        HOLDER.get_or_init(|| {
            debug!("constructing process-wide holder");
            Holder::with_value(initial.unwrap_or(Value::Null))
        })
    }

    /// Strict construction: fails once a holder exists or is being
    /// constructed. This is the only way to observe the construction guard
    /// from outside; the plain constructor is private.
    pub fn try_init(value: Value) -> Result<&'static Holder, HolderError> {
        HOLDER
            .try_init(|| Holder::with_value(value))
            .map_err(|state| match state {
                CellState::Constructing => HolderError::InitInProgress,
                _ => HolderError::AlreadyInitialized,
            })
    }

    /// A clone of the currently held value.
    pub fn value(&self) -> Value {
        self.value.read().unwrap().clone()
    }

    /// Replaces the held value. Visible through every reference obtained
    /// from [`Holder::instance`].
    pub fn set_value(&self, value: Value) {
        *self.value.write().unwrap() = value;
    }

    /// The held value rendered as plain text. Strings render without
    /// surrounding quotes; everything else uses its JSON form.
    pub fn display_value(&self) -> String {
        match self.value() {
            Value::String(text) => text,
            other => other.to_string(),
        }
    }

    /// A descriptive line embedding the currently stored value.
    pub fn describe(&self) -> String {
        format!(
            "Executing business logic with value: {}",
            self.display_value()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::{Arc, Barrier};
    use std::thread;

    #[test]
    fn fresh_cell_is_empty() {
        let cell: SingletonCell<u32> = SingletonCell::new();
        assert_eq!(cell.state(), CellState::Empty);
        assert_eq!(cell.get(), None);
    }

    #[test]
    fn get_or_init_constructs_exactly_once() {
        let cell = SingletonCell::new();
        let first = cell.get_or_init(|| "first".to_string());
        let second = cell.get_or_init(|| "second".to_string());

        assert!(std::ptr::eq(first, second));
        assert_eq!(first, "first");
        assert_eq!(cell.state(), CellState::Ready);
    }

    #[test]
    fn try_init_wins_on_an_empty_cell() {
        let cell = SingletonCell::new();
        let value = cell.try_init(|| 7u32).unwrap();
        assert_eq!(*value, 7);
        assert_eq!(cell.state(), CellState::Ready);
    }

    #[test]
    fn try_init_fails_once_ready() {
        let cell = SingletonCell::new();
        cell.get_or_init(|| 1u32);
        assert_eq!(cell.try_init(|| 2).unwrap_err(), CellState::Ready);
        // The stored value is untouched by the failed attempt.
        assert_eq!(cell.get(), Some(&1));
    }

    #[test]
    fn racing_threads_construct_a_single_value() {
        let cell = Arc::new(SingletonCell::new());
        let constructions = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8usize)
            .map(|i| {
                let cell = Arc::clone(&cell);
                let constructions = Arc::clone(&constructions);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    *cell.get_or_init(|| {
                        constructions.fetch_add(1, Ordering::SeqCst);
                        i
                    })
                })
            })
            .collect();

        let values: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(constructions.load(Ordering::SeqCst), 1);
        assert!(values.iter().all(|v| *v == values[0]));
        assert_eq!(cell.state(), CellState::Ready);
    }

    #[test]
    fn holder_error_messages_point_at_the_accessor() {
        assert!(HolderError::AlreadyInitialized
            .to_string()
            .contains("Holder::instance()"));
        assert!(HolderError::InitInProgress
            .to_string()
            .contains("Holder::instance()"));
    }
}
