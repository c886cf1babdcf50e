//! Step-by-step construction of notification requests.

use super::factory::{ChannelFactory, Factory};
use super::ChannelKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when `build` is called before the notification is complete.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("notification has no recipient")]
    MissingRecipient,
    #[error("notification has no message")]
    MissingMessage,
}

/// A fully specified notification request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: ChannelKind,
    pub recipient: String,
    pub message: String,
}

impl Notification {
    /// Starts building a notification for `kind`.
    pub fn builder(kind: ChannelKind) -> NotificationBuilder {
        NotificationBuilder {
            kind,
            recipient: None,
            message: None,
        }
    }

    /// Dispatches this notification through the factory for its kind.
    pub fn dispatch(&self) -> String {
        Factory::new(self.kind).dispatch(&self.recipient, &self.message)
    }
}

/// Builder for [`Notification`].
#[derive(Debug, Clone)]
pub struct NotificationBuilder {
    kind: ChannelKind,
    recipient: Option<String>,
    message: Option<String>,
}

impl NotificationBuilder {
    pub fn recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Finishes the build, rejecting an incomplete notification.
    pub fn build(self) -> Result<Notification, BuildError> {
        Ok(Notification {
            kind: self.kind,
            recipient: self.recipient.ok_or(BuildError::MissingRecipient)?,
            message: self.message.ok_or(BuildError::MissingMessage)?,
        })
    }
}
