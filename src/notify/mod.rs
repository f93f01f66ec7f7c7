//! Outbound notifications.
//!
//! A [`Notifier`] delivers one [`Notification`] to an external channel.
//! Delivery failures are reported as [`NotifyError`] and are never retried
//! here; callers decide whether a failure is fatal.

mod dispatcher;
mod log;
mod mailer;
pub mod templates;

use async_trait::async_trait;
use thiserror::Error;

use crate::DeskError;

pub use dispatcher::NotificationDispatcher;
pub use log::LogNotifier;
pub use mailer::HttpMailer;
pub use templates::Templates;

/// A single outbound email-like message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
    /// Optional reply-to address.
    pub reply_to: Option<String>,
}

/// Notification delivery error.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The provider could not be reached or timed out.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    #[error("provider rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// Any other delivery failure.
    #[error("{0}")]
    Failed(String),
}

impl From<NotifyError> for DeskError {
    fn from(err: NotifyError) -> Self {
        DeskError::DeliveryFailed(err.to_string())
    }
}

/// Delivers notifications to an external channel.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Attempt delivery of one notification.
    async fn send(&self, notification: &Notification) -> Result<(), NotifyError>;
}
