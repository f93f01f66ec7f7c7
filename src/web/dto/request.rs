//! Request DTOs for Web API.
//!
//! Missing fields deserialize as empty strings so that the workflow reports
//! them as invalid input rather than as a JSON syntax error.

use serde::Deserialize;
use validator::Validate;

use crate::inquiry::NewInquiry;

/// Contact form submission.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(length(max = 100, message = "Name is too long"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 254, message = "Email is too long"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 32, message = "Phone is too long"))]
    pub phone: String,
    #[serde(default)]
    #[validate(length(max = 8, message = "Country code is too long"))]
    pub country_code: String,
    #[serde(default)]
    #[validate(length(max = 5000, message = "Message is too long"))]
    pub message: String,
}

impl From<ContactRequest> for NewInquiry {
    fn from(req: ContactRequest) -> Self {
        NewInquiry::new(req.name, req.email, req.phone, req.country_code, req.message)
    }
}

/// Administrator registration or login.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    /// Login identifier (an email address).
    #[serde(default, alias = "login")]
    #[validate(length(max = 254, message = "Email is too long"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 1024, message = "Password is too long"))]
    pub password: String,
}

/// Operator reply to an inquiry.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    #[serde(default)]
    #[validate(length(max = 10000, message = "Reply is too long"))]
    pub reply_message: String,
}

/// Administrator password change.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    #[validate(length(max = 1024, message = "Password is too long"))]
    pub current_password: String,
    #[serde(default)]
    #[validate(length(max = 1024, message = "Password is too long"))]
    pub new_password: String,
}
