//! Response DTOs for Web API.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::IssuedToken;
use crate::inquiry::Inquiry;
use crate::workflow::{DeleteOutcome, NoticeOutcome};

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: String,
}

/// Plain confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Accepted contact submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub id: String,
    pub message: String,
}

/// Registered administrator.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: i64,
    pub message: String,
}

/// Issued session token.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    /// Seconds until the token expires.
    pub expires_in: i64,
}

impl From<IssuedToken> for LoginResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            expires_in: issued.expires_in,
        }
    }
}

/// Stored inquiry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country_code: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<Inquiry> for InquiryResponse {
    fn from(inquiry: Inquiry) -> Self {
        Self {
            id: inquiry.id.to_string(),
            name: inquiry.name,
            email: inquiry.email,
            phone: inquiry.phone,
            country_code: inquiry.country_code,
            message: inquiry.message,
            created_at: inquiry.created_at,
        }
    }
}

/// Deletion result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub id: String,
    pub message: String,
    /// "sent" or "failed".
    pub notice: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_error: Option<String>,
}

impl From<DeleteOutcome> for DeleteResponse {
    fn from(outcome: DeleteOutcome) -> Self {
        let (notice, notice_error) = match outcome.notice {
            NoticeOutcome::Sent => ("sent", None),
            NoticeOutcome::Failed(reason) => ("failed", Some(reason)),
        };
        Self {
            id: outcome.id.to_string(),
            message: "Contact deleted successfully".to_string(),
            notice,
            notice_error,
        }
    }
}
