//! Notification templates.
//!
//! All submitter- and operator-supplied text is HTML-escaped before it is
//! placed in a body.

use super::Notification;
use crate::inquiry::Inquiry;

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text and keep its line breaks.
fn escape_multiline(s: &str) -> String {
    escape_html(s).replace("\r\n", "\n").replace('\n', "<br>")
}

/// Builds the notifications sent by the inquiry workflow.
#[derive(Debug, Clone)]
pub struct Templates {
    brand: String,
}

impl Templates {
    /// Create templates signed with the given brand name.
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
        }
    }

    /// Alert to the administrative recipient about a new inquiry.
    ///
    /// Replies go straight to the submitter.
    pub fn admin_alert(&self, inquiry: &Inquiry, admin_recipient: &str) -> Notification {
        let html = format!(
            "<h2>New Contact Message</h2>\n\
             <p><strong>Name:</strong> {name}</p>\n\
             <p><strong>Email:</strong> {email}</p>\n\
             <p><strong>Phone:</strong> <a href=\"{link}\">{code} {phone}</a></p>\n\
             <blockquote>{message}</blockquote>",
            name = escape_html(&inquiry.name),
            email = escape_html(&inquiry.email),
            link = escape_html(&inquiry.whatsapp_link()),
            code = escape_html(&inquiry.country_code),
            phone = escape_html(&inquiry.phone),
            message = escape_multiline(&inquiry.message),
        );

        Notification {
            to: admin_recipient.to_string(),
            subject: format!("Message from {}", inquiry.name),
            html,
            reply_to: Some(inquiry.email.clone()),
        }
    }

    /// Automatic acknowledgement to the submitter.
    pub fn acknowledgement(&self, inquiry: &Inquiry) -> Notification {
        let brand = escape_html(&self.brand);
        let html = format!(
            "<h2>Hello {name},</h2>\n\
             <p>Thank you for contacting {brand}.</p>\n\
             <p>We'll get back to you shortly.</p>\n\
             <p>- Team {brand}</p>",
            name = escape_html(&inquiry.name),
        );

        Notification {
            to: inquiry.email.clone(),
            subject: "We received your message".to_string(),
            html,
            reply_to: None,
        }
    }

    /// Operator reply relayed to the submitter.
    pub fn reply(&self, inquiry: &Inquiry, text: &str) -> Notification {
        let html = format!(
            "<p>Hello {name},</p>\n<p>{text}</p>\n<p>- {brand} Team</p>",
            name = escape_html(&inquiry.name),
            text = escape_multiline(text),
            brand = escape_html(&self.brand),
        );

        Notification {
            to: inquiry.email.clone(),
            subject: format!("Reply from {}", self.brand),
            html,
            reply_to: None,
        }
    }

    /// Service-unavailable notice sent after an inquiry is deleted.
    pub fn service_notice(&self, inquiry: &Inquiry) -> Notification {
        let html = format!(
            "<div style=\"font-family:Arial,sans-serif;padding:20px;\">\n\
             <h2>Hello {name},</h2>\n\
             <p>We regret to inform you that currently, we are not able to provide our services.</p>\n\
             <p>Thank you for your interest, and we apologize for the inconvenience.</p>\n\
             </div>",
            name = escape_html(&inquiry.name),
        );

        Notification {
            to: inquiry.email.clone(),
            subject: format!("Notice Regarding Our Services \u{2014} {}", self.brand),
            html,
            reply_to: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::InquiryId;
    use chrono::Utc;

    fn inquiry() -> Inquiry {
        Inquiry {
            id: InquiryId::from("abc"),
            name: "Ann <b>".to_string(),
            email: "ann@x.com".to_string(),
            phone: "9876543210".to_string(),
            country_code: "+91".to_string(),
            message: "Line one\nLine <two>".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_admin_alert() {
        let t = Templates::new("VJ Events");
        let n = t.admin_alert(&inquiry(), "owner@x.com");

        assert_eq!(n.to, "owner@x.com");
        assert_eq!(n.subject, "Message from Ann <b>");
        assert_eq!(n.reply_to.as_deref(), Some("ann@x.com"));
        assert!(n.html.contains("https://wa.me/919876543210"));
        assert!(n.html.contains("Ann &lt;b&gt;"));
        assert!(n.html.contains("Line one<br>Line &lt;two&gt;"));
        assert!(!n.html.contains("<b>"));
    }

    #[test]
    fn test_acknowledgement() {
        let n = Templates::new("VJ Events").acknowledgement(&inquiry());
        assert_eq!(n.to, "ann@x.com");
        assert_eq!(n.subject, "We received your message");
        assert!(n.html.contains("Thank you for contacting VJ Events."));
        assert!(n.reply_to.is_none());
    }

    #[test]
    fn test_reply() {
        let n = Templates::new("VJ Events").reply(&inquiry(), "We are <available>");
        assert_eq!(n.to, "ann@x.com");
        assert_eq!(n.subject, "Reply from VJ Events");
        assert!(n.html.contains("We are &lt;available&gt;"));
    }

    #[test]
    fn test_service_notice() {
        let n = Templates::new("VJ Events").service_notice(&inquiry());
        assert_eq!(n.to, "ann@x.com");
        assert_eq!(n.subject, "Notice Regarding Our Services \u{2014} VJ Events");
        assert!(n.html.contains("not able to provide our services"));
    }
}
