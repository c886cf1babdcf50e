//! Factories that construct notification channels.
//!
//! Every dispatch constructs a fresh channel and drops it afterwards;
//! nothing is cached, shared, or pooled.

use super::{Channel, ChannelKind, TemplateChannel};
use tracing::debug;

/// The creator capability: construct a channel, or dispatch through one.
pub trait ChannelFactory: Send + Sync {
    /// Constructs a fresh channel for a single dispatch.
    fn create(&self) -> Box<dyn Channel>;

    /// Constructs a channel and immediately forwards the dispatch to it,
    /// returning the confirmation text.
    fn dispatch(&self, recipient: &str, message: &str) -> String {
        let channel = self.create();
        debug!(kind = %channel.kind(), recipient, "dispatching notification");
        channel.send(recipient, message)
    }
}

/// A factory for exactly one channel kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Factory {
    kind: ChannelKind,
}

impl Factory {
    pub fn new(kind: ChannelKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    // Per-kind shorthands.
    pub fn email() -> Self {
        Self::new(ChannelKind::Email)
    }

    pub fn sms() -> Self {
        Self::new(ChannelKind::Sms)
    }

    pub fn push() -> Self {
        Self::new(ChannelKind::Push)
    }

    pub fn slack() -> Self {
        Self::new(ChannelKind::Slack)
    }

    pub fn whatsapp() -> Self {
        Self::new(ChannelKind::WhatsApp)
    }

    pub fn telegram() -> Self {
        Self::new(ChannelKind::Telegram)
    }
}

impl ChannelFactory for Factory {
    fn create(&self) -> Box<dyn Channel> {
        Box::new(TemplateChannel::new(self.kind))
    }
}

/// Drives a dispatch through any factory without knowing the concrete
/// channel behind it.
pub fn run(factory: &dyn ChannelFactory, recipient: &str, message: &str) -> String {
    factory.dispatch(recipient, message)
}
