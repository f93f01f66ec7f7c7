//! Inquiry workflow.
//!
//! Orchestrates intake, listing, reply and deletion on top of the inquiry
//! store and the notifier. Administrative operations take the raw bearer
//! token and check it before touching the store.
//!
//! Notification failures are handled per operation:
//!
//! - submit: background, logged only
//! - reply: fatal, reported as `DeliveryFailed`
//! - delete: attempted after the record is gone, reported in the outcome

use std::sync::Arc;

use tracing::{info, warn};

use crate::auth::{CredentialStore, IssuedToken, SessionIssuer};
use crate::config::Config;
use crate::db::AdministratorId;
use crate::inquiry::{Inquiry, InquiryId, InquiryRepository, NewInquiry};
use crate::notify::{NotificationDispatcher, Notifier, Templates};
use crate::{Database, DeskError, Result};

/// Outcome of the notice sent after a deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeOutcome {
    /// The submitter was notified.
    Sent,
    /// The notice could not be delivered; the deletion still stands.
    Failed(String),
}

/// Result of a successful deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// ID of the deleted inquiry.
    pub id: InquiryId,
    /// What happened to the service notice.
    pub notice: NoticeOutcome,
}

/// The inquiry lifecycle workflow.
#[derive(Clone)]
pub struct InquiryWorkflow {
    db: Database,
    credentials: CredentialStore,
    sessions: SessionIssuer,
    notifier: Arc<dyn Notifier>,
    dispatcher: NotificationDispatcher,
    templates: Templates,
    admin_recipient: String,
}

impl InquiryWorkflow {
    /// Assemble a workflow from its parts.
    pub fn new(
        db: Database,
        credentials: CredentialStore,
        sessions: SessionIssuer,
        notifier: Arc<dyn Notifier>,
        templates: Templates,
        admin_recipient: impl Into<String>,
    ) -> Self {
        let dispatcher = NotificationDispatcher::new(Arc::clone(&notifier));
        Self {
            db,
            credentials,
            sessions,
            notifier,
            dispatcher,
            templates,
            admin_recipient: admin_recipient.into(),
        }
    }

    /// Build a workflow from configuration.
    pub fn from_config(db: Database, config: &Config, notifier: Arc<dyn Notifier>) -> Self {
        let credentials = CredentialStore::new(db.clone())
            .with_registration_enabled(config.auth.registration_enabled);
        let sessions = SessionIssuer::new(&config.auth.jwt_secret);
        let templates = Templates::new(config.mail.brand_name.clone());

        Self::new(
            db,
            credentials,
            sessions,
            notifier,
            templates,
            config.mail.admin_recipient.clone(),
        )
    }

    /// Background dispatcher used for fire-and-forget notifications.
    pub fn dispatcher(&self) -> &NotificationDispatcher {
        &self.dispatcher
    }

    /// Register the administrator.
    pub async fn register(&self, login: &str, secret: &str) -> Result<AdministratorId> {
        self.credentials.register(login, secret).await
    }

    /// Verify credentials and issue a session token.
    pub async fn login(&self, login: &str, secret: &str) -> Result<IssuedToken> {
        let admin_id = self.credentials.verify(login, secret).await?;
        let issued = self.sessions.issue(admin_id)?;
        info!(admin_id, "Administrator logged in");
        Ok(issued)
    }

    /// Change the administrator's secret.
    pub async fn change_secret(&self, token: &str, current: &str, new_secret: &str) -> Result<()> {
        let admin_id = self.authorize(token)?;
        self.credentials
            .change_secret(admin_id, current, new_secret)
            .await
    }

    /// Public intake.
    ///
    /// Returns once the inquiry is stored. The admin alert and the
    /// acknowledgement are sent in the background and their outcome never
    /// reaches the caller.
    pub async fn submit(&self, new_inquiry: &NewInquiry) -> Result<Inquiry> {
        let repo = InquiryRepository::new(self.db.pool());
        let inquiry = repo.create(new_inquiry).await?;
        info!(inquiry_id = %inquiry.id, "Inquiry received");

        let mut notifications = Vec::with_capacity(2);
        if self.admin_recipient.is_empty() {
            warn!(inquiry_id = %inquiry.id, "No admin recipient configured, skipping alert");
        } else {
            notifications.push(self.templates.admin_alert(&inquiry, &self.admin_recipient));
        }
        notifications.push(self.templates.acknowledgement(&inquiry));

        self.dispatcher.dispatch(inquiry.id.as_str(), notifications);

        Ok(inquiry)
    }

    /// List all inquiries, most recent first.
    pub async fn list(&self, token: &str) -> Result<Vec<Inquiry>> {
        self.authorize(token)?;
        InquiryRepository::new(self.db.pool()).list_recent().await
    }

    /// Relay an operator reply to the submitter.
    ///
    /// Nothing is persisted. A delivery failure fails the operation.
    pub async fn reply(&self, token: &str, id: &InquiryId, text: &str) -> Result<()> {
        let admin_id = self.authorize(token)?;
        if text.trim().is_empty() {
            return Err(DeskError::InvalidInput("reply message is required".to_string()));
        }

        let inquiry = InquiryRepository::new(self.db.pool()).get_by_id(id).await?;
        let notification = self.templates.reply(&inquiry, text.trim());

        if let Err(e) = self.notifier.send(&notification).await {
            warn!(
                inquiry_id = %id,
                recipient = %inquiry.email,
                error = %e,
                "Reply delivery failed"
            );
            return Err(e.into());
        }

        info!(inquiry_id = %id, admin_id, "Reply sent");
        Ok(())
    }

    /// Delete an inquiry, then notify the submitter.
    ///
    /// The deletion is final once the store commits; a failed notice is
    /// reported in the outcome and never turns into an error.
    pub async fn delete(&self, token: &str, id: &InquiryId) -> Result<DeleteOutcome> {
        let admin_id = self.authorize(token)?;
        let repo = InquiryRepository::new(self.db.pool());

        let inquiry = repo.get_by_id(id).await?;
        repo.delete_by_id(id).await?;
        info!(inquiry_id = %id, admin_id, "Inquiry deleted");

        let notice = match self
            .notifier
            .send(&self.templates.service_notice(&inquiry))
            .await
        {
            Ok(()) => NoticeOutcome::Sent,
            Err(e) => {
                warn!(
                    inquiry_id = %id,
                    recipient = %inquiry.email,
                    error = %e,
                    "Service notice failed after deletion"
                );
                NoticeOutcome::Failed(e.to_string())
            }
        };

        Ok(DeleteOutcome {
            id: inquiry.id,
            notice,
        })
    }

    fn authorize(&self, token: &str) -> Result<AdministratorId> {
        self.sessions.verify(token)
    }
}
