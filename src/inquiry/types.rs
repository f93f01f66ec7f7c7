//! Inquiry model.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::{DeskError, Result};

/// Maximum length for the submitter name (in characters).
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for the email address (in characters).
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length for the message body (in characters).
pub const MAX_MESSAGE_LENGTH: usize = 5000;

/// Opaque, store-assigned inquiry identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InquiryId(String);

impl InquiryId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for InquiryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for InquiryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for InquiryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    /// Inquiry ID.
    pub id: InquiryId,
    /// Submitter name.
    pub name: String,
    /// Submitter email address.
    pub email: String,
    /// Phone number (digits only).
    pub phone: String,
    /// Phone country code, e.g. "+91".
    pub country_code: String,
    /// Message body.
    pub message: String,
    /// Server-assigned creation time.
    pub created_at: DateTime<Utc>,
}

impl Inquiry {
    /// WhatsApp click-to-chat link for the submitter's phone number.
    pub fn whatsapp_link(&self) -> String {
        format!(
            "https://wa.me/{}{}",
            self.country_code.trim_start_matches('+'),
            self.phone
        )
    }
}

/// Fields submitted through public intake.
#[derive(Debug, Clone, Default)]
pub struct NewInquiry {
    /// Submitter name.
    pub name: String,
    /// Submitter email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Phone country code.
    pub country_code: String,
    /// Message body.
    pub message: String,
}

impl NewInquiry {
    /// Create a new inquiry submission.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        country_code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            country_code: country_code.into(),
            message: message.into(),
        }
    }

    /// Validate the submission and return its normalized form.
    ///
    /// Every field is required. Surrounding whitespace is trimmed and the
    /// phone number is reduced to its digits.
    pub fn validate(&self) -> Result<NewInquiry> {
        let name = required("name", &self.name)?;
        let email = required("email", &self.email)?;
        let phone = required("phone", &self.phone)?;
        let country_code = required("countryCode", &self.country_code)?;
        let message = required("message", &self.message)?;

        max_length("name", name, MAX_NAME_LENGTH)?;
        max_length("email", email, MAX_EMAIL_LENGTH)?;
        max_length("message", message, MAX_MESSAGE_LENGTH)?;

        if !is_plausible_email(email) {
            return Err(DeskError::InvalidInput("email is malformed".to_string()));
        }

        let digits = country_code.strip_prefix('+').unwrap_or("");
        if digits.is_empty() || digits.len() > 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DeskError::InvalidInput(
                "countryCode must be '+' followed by 1-4 digits".to_string(),
            ));
        }

        let phone: String = phone.chars().filter(|c| *c != ' ' && *c != '-').collect();
        if !(4..=20).contains(&phone.len()) || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(DeskError::InvalidInput(
                "phone must contain 4-20 digits".to_string(),
            ));
        }

        Ok(NewInquiry {
            name: name.to_string(),
            email: email.to_string(),
            phone,
            country_code: country_code.to_string(),
            message: message.to_string(),
        })
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DeskError::InvalidInput(format!("{field} is required")));
    }
    Ok(value)
}

fn max_length(field: &str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(DeskError::InvalidInput(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !email.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

/// Format a timestamp the way it is stored: RFC3339 with fixed microseconds,
/// so lexical order equals chronological order.
pub(crate) fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewInquiry {
        NewInquiry::new(
            "Ann",
            "ann@x.com",
            "9876543210",
            "+91",
            "Need lights for a 200-guest wedding",
        )
    }

    #[test]
    fn test_validate_ok() {
        let normalized = valid().validate().unwrap();
        assert_eq!(normalized.name, "Ann");
        assert_eq!(normalized.phone, "9876543210");
        assert_eq!(normalized.country_code, "+91");
    }

    #[test]
    fn test_validate_trims_and_strips_phone() {
        let mut input = valid();
        input.name = "  Ann  ".to_string();
        input.phone = "98765 43-210".to_string();

        let normalized = input.validate().unwrap();
        assert_eq!(normalized.name, "Ann");
        assert_eq!(normalized.phone, "9876543210");
    }

    #[test]
    fn test_validate_each_required_field() {
        let blank = |f: fn(&mut NewInquiry)| {
            let mut input = valid();
            f(&mut input);
            input.validate()
        };

        assert!(matches!(blank(|i| i.name.clear()), Err(DeskError::InvalidInput(_))));
        assert!(matches!(blank(|i| i.email.clear()), Err(DeskError::InvalidInput(_))));
        assert!(matches!(blank(|i| i.phone.clear()), Err(DeskError::InvalidInput(_))));
        assert!(matches!(
            blank(|i| i.country_code.clear()),
            Err(DeskError::InvalidInput(_))
        ));
        assert!(matches!(
            blank(|i| i.message = "   ".to_string()),
            Err(DeskError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_malformed_fields() {
        let mut input = valid();
        input.email = "ann.x.com".to_string();
        assert!(input.validate().is_err());

        let mut input = valid();
        input.email = "ann@@x.com".to_string();
        assert!(input.validate().is_err());

        let mut input = valid();
        input.country_code = "91".to_string();
        assert!(input.validate().is_err());

        let mut input = valid();
        input.phone = "12ab".to_string();
        assert!(input.validate().is_err());

        let mut input = valid();
        input.message = "x".repeat(MAX_MESSAGE_LENGTH + 1);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_whatsapp_link() {
        let inquiry = Inquiry {
            id: InquiryId::from("abc"),
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            phone: "9876543210".to_string(),
            country_code: "+91".to_string(),
            message: "hi".to_string(),
            created_at: Utc::now(),
        };
        assert_eq!(inquiry.whatsapp_link(), "https://wa.me/919876543210");
    }

    #[test]
    fn test_format_timestamp_fixed_width() {
        let a = DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let b = DateTime::parse_from_rfc3339("2026-01-01T00:00:00.5Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_timestamp(&a), "2026-01-01T00:00:00.000000Z");
        assert!(format_timestamp(&a) < format_timestamp(&b));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(InquiryId::generate(), InquiryId::generate());
    }
}
