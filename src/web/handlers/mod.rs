//! API handlers.

pub mod admin;
pub mod contact;

use crate::workflow::InquiryWorkflow;

pub use admin::{change_password, delete_contact, list_contacts, login, register, reply};
pub use contact::{health, ping, submit_contact};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The inquiry workflow.
    pub workflow: InquiryWorkflow,
    /// Service name shown by the health check.
    pub service_name: String,
}

impl AppState {
    /// Create a new application state.
    pub fn new(workflow: InquiryWorkflow, service_name: impl Into<String>) -> Self {
        Self {
            workflow,
            service_name: service_name.into(),
        }
    }
}
