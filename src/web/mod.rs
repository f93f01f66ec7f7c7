//! Web API module for inquirydesk.
//!
//! HTTP surface over the inquiry workflow: public intake, administrator
//! login, and the session-gated inquiry management endpoints.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::{shutdown_signal, WebServer};
