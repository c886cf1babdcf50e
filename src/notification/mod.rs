//! Notification channels and the capability they implement.
//!
//! A [`Channel`] formats a human-readable delivery confirmation for one
//! notification kind; it performs no actual delivery. Dispatch logic never
//! names a concrete channel: channels are constructed through the factories
//! in [`factory`], one per kind, and routed at runtime via [`registry`].

pub mod builder;
pub mod factory;
pub mod registry;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six supported notification channel kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Email,
    Sms,
    Push,
    Slack,
    #[value(name = "whatsapp")]
    WhatsApp,
    Telegram,
}

impl ChannelKind {
    /// Every kind, in declaration order.
    pub const ALL: [ChannelKind; 6] = [
        ChannelKind::Email,
        ChannelKind::Sms,
        ChannelKind::Push,
        ChannelKind::Slack,
        ChannelKind::WhatsApp,
        ChannelKind::Telegram,
    ];

    /// The wording that identifies this kind in confirmations and logs.
    pub fn label(&self) -> &'static str {
        match self {
            ChannelKind::Email => "email",
            ChannelKind::Sms => "SMS",
            ChannelKind::Push => "push notification",
            ChannelKind::Slack => "Slack",
            ChannelKind::WhatsApp => "WhatsApp",
            ChannelKind::Telegram => "Telegram",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The capability every notification channel implements.
pub trait Channel: Send + Sync {
    /// The kind of channel behind this instance.
    fn kind(&self) -> ChannelKind;

    /// Formats the confirmation for sending `message` to `recipient`.
    ///
    /// A pure function of its inputs: no delivery, no I/O, no validation.
    /// Recipient and message are opaque text.
    fn send(&self, recipient: &str, message: &str) -> String;
}

/// The single channel implementation, parameterized by kind.
///
/// The kinds differ only in confirmation wording, so one type carrying a
/// kind tag covers all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateChannel {
    kind: ChannelKind,
}

impl TemplateChannel {
    pub fn new(kind: ChannelKind) -> Self {
        Self { kind }
    }
}

impl Channel for TemplateChannel {
    fn kind(&self) -> ChannelKind {
        self.kind
    }

    fn send(&self, recipient: &str, message: &str) -> String {
        match self.kind {
            ChannelKind::Email => format!("Sending email to {}: {}", recipient, message),
            ChannelKind::Sms => format!("Sending SMS to {}: {}", recipient, message),
            ChannelKind::Push => {
                format!("Sending push notification to device {}: {}", recipient, message)
            }
            ChannelKind::Slack => {
                format!("Sending Slack message to channel {}: {}", recipient, message)
            }
            ChannelKind::WhatsApp => format!("Sending WhatsApp to {}: {}", recipient, message),
            ChannelKind::Telegram => {
                format!("Sending Telegram message to {}: {}", recipient, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_reports_its_kind() {
        for kind in ChannelKind::ALL {
            assert_eq!(TemplateChannel::new(kind).kind(), kind);
        }
    }

    #[test]
    fn every_confirmation_carries_the_kind_label() {
        for kind in ChannelKind::ALL {
            let confirmation = TemplateChannel::new(kind).send("r", "m");
            assert!(
                confirmation.contains(kind.label()),
                "{} missing from: {}",
                kind.label(),
                confirmation
            );
        }
    }

    #[test]
    fn labels_are_distinct() {
        for a in ChannelKind::ALL {
            for b in ChannelKind::ALL {
                if a != b {
                    assert_ne!(a.label(), b.label());
                }
            }
        }
    }
}
