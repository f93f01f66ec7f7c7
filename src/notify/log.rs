//! Log-only notifier, used when outbound mail is disabled.

use async_trait::async_trait;
use tracing::info;

use super::{Notification, Notifier, NotifyError};

/// Notifier that records each notification in the log and always succeeds.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        info!(
            recipient = %notification.to,
            subject = %notification.subject,
            "Mail disabled, notification logged only"
        );
        Ok(())
    }
}
