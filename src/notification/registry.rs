//! A runtime registry of channel factories.
//!
//! `FactoryRegistry` maps channel kinds to the factories that serve them,
//! so callers can route a dispatch by kind alone and tests can swap in
//! doubles for individual kinds.

use super::factory::{ChannelFactory, Factory};
use super::ChannelKind;
use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no factory registered for channel kind '{0}'")]
    UnknownKind(ChannelKind),
}

pub struct FactoryRegistry {
    factories: HashMap<ChannelKind, Box<dyn ChannelFactory>>,
}

impl FactoryRegistry {
    /// A registry with no factories at all.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers `factory` for `kind`, replacing any previous entry.
    pub fn register(&mut self, kind: ChannelKind, factory: Box<dyn ChannelFactory>) {
        if self.factories.insert(kind, factory).is_some() {
            warn!(kind = %kind, "replacing registered factory");
        }
    }

    /// Removes the factory for `kind`; returns whether one was present.
    pub fn unregister(&mut self, kind: ChannelKind) -> bool {
        self.factories.remove(&kind).is_some()
    }

    pub fn get(&self, kind: ChannelKind) -> Option<&dyn ChannelFactory> {
        self.factories.get(&kind).map(|factory| factory.as_ref())
    }

    /// Routes a dispatch to the factory registered for `kind`.
    pub fn dispatch(
        &self,
        kind: ChannelKind,
        recipient: &str,
        message: &str,
    ) -> Result<String, RegistryError> {
        let factory = self.get(kind).ok_or(RegistryError::UnknownKind(kind))?;
        Ok(factory.dispatch(recipient, message))
    }

    /// The registered kinds, in declaration order.
    pub fn kinds(&self) -> Vec<ChannelKind> {
        ChannelKind::ALL
            .iter()
            .filter(|kind| self.factories.contains_key(*kind))
            .copied()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for FactoryRegistry {
    /// A registry serving every kind through its standard factory.
    fn default() -> Self {
        let mut registry = Self::empty();
        for kind in ChannelKind::ALL {
            registry.register(kind, Box::new(Factory::new(kind)));
        }
        registry
    }
}
