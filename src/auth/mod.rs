//! Authentication module for inquirydesk.
//!
//! This module provides password hashing, the administrator credential
//! store, and stateless session tokens.

mod credential;
mod password;
mod session;

pub use credential::{CredentialStore, MAX_LOGIN_LENGTH};
pub use password::{
    hash_password, validate_password, verify_password, PasswordError, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
pub use session::{IssuedToken, SessionClaims, SessionIssuer, SESSION_LIFETIME_SECS};
