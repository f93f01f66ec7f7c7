//! inquirydesk - contact inquiry backend
//!
//! Visitors submit inquiries; a single administrator lists, replies to and
//! deletes them. Email notifications go out as a side effect.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod inquiry;
pub mod logging;
pub mod notify;
pub mod web;
pub mod workflow;

pub use auth::{CredentialStore, IssuedToken, SessionIssuer};
pub use config::Config;
pub use db::Database;
pub use error::{DeskError, Result};
pub use inquiry::{Inquiry, InquiryId, InquiryRepository, NewInquiry};
pub use notify::{HttpMailer, LogNotifier, Notification, NotificationDispatcher, Notifier};
pub use workflow::{DeleteOutcome, InquiryWorkflow, NoticeOutcome};
