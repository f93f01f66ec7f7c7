//! HTTP mail provider client.
//!
//! Speaks the Resend-style JSON API: one POST per message with a bearer
//! API key.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use super::{Notification, Notifier, NotifyError};
use crate::config::MailConfig;
use crate::{DeskError, Result};

/// Connection timeout in seconds.
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Longest provider error body kept in an error message.
const MAX_ERROR_BODY: usize = 512;

/// Request body sent to the provider.
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

/// Notifier that delivers through an HTTP mail API.
#[derive(Clone)]
pub struct HttpMailer {
    client: Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl HttpMailer {
    /// Build a mailer from the mail configuration.
    pub fn new(config: &MailConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DeskError::Internal(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            from: config.from.clone(),
        })
    }
}

#[async_trait]
impl Notifier for HttpMailer {
    async fn send(&self, notification: &Notification) -> std::result::Result<(), NotifyError> {
        let body = SendEmailRequest {
            from: &self.from,
            to: [&notification.to],
            subject: &notification.subject,
            html: &notification.html,
            reply_to: notification.reply_to.as_deref(),
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let mut text = response.text().await.unwrap_or_default();
            if text.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !text.is_char_boundary(cut) {
                    cut -= 1;
                }
                text.truncate(cut);
            }
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        debug!(recipient = %notification.to, "Notification accepted by provider");
        Ok(())
    }
}
