//! Fire-and-forget notification dispatch.

use std::sync::Arc;

use tokio_util::task::TaskTracker;
use tracing::{info, warn, Instrument};

use super::{Notification, Notifier};

/// Sends notifications on detached background tasks.
///
/// The caller never observes the outcome; each failure is logged. The
/// tracker lets shutdown wait for sends that are still in flight.
#[derive(Clone)]
pub struct NotificationDispatcher {
    notifier: Arc<dyn Notifier>,
    tracker: TaskTracker,
}

impl NotificationDispatcher {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            tracker: TaskTracker::new(),
        }
    }

    /// Queue notifications for background delivery, in order.
    ///
    /// Returns immediately. Must be called from within a tokio runtime.
    pub fn dispatch(&self, inquiry_id: &str, notifications: Vec<Notification>) {
        if notifications.is_empty() {
            return;
        }

        let notifier = Arc::clone(&self.notifier);
        let span = tracing::info_span!("notify", inquiry_id = %inquiry_id);

        self.tracker.spawn(
            async move {
                for notification in notifications {
                    match notifier.send(&notification).await {
                        Ok(()) => {
                            info!(recipient = %notification.to, "Notification sent");
                        }
                        Err(e) => {
                            warn!(
                                recipient = %notification.to,
                                error = %e,
                                "Background notification failed"
                            );
                        }
                    }
                }
            }
            .instrument(span),
        );
    }

    /// Number of dispatch tasks still running.
    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    /// Close the tracker and wait for in-flight sends to finish.
    pub async fn shutdown(&self) {
        self.tracker.close();
        self.tracker.wait().await;
    }
}
