//! Inquiry module.
//!
//! Durable record of contact-form submissions: create, list by recency,
//! fetch by ID and delete by ID.

mod repository;
mod types;

pub use repository::InquiryRepository;
pub use types::{
    Inquiry, InquiryId, NewInquiry, MAX_EMAIL_LENGTH, MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH,
};
