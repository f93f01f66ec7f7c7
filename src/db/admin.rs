//! Administrator model.

/// Identifier of the administrator record.
pub type AdministratorId = i64;

/// The administrator identity.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Administrator {
    /// Unique administrator ID.
    pub id: AdministratorId,
    /// Login identifier (unique, case-insensitive).
    pub login: String,
    /// Password hash (Argon2 PHC string).
    pub password_hash: String,
    /// Creation timestamp.
    pub created_at: String,
}

/// Data for creating the administrator.
#[derive(Debug, Clone)]
pub struct NewAdministrator {
    /// Login identifier.
    pub login: String,
    /// Password hash (must already be hashed).
    pub password_hash: String,
}

impl NewAdministrator {
    /// Create a new administrator record from a login and a pre-computed hash.
    pub fn new(login: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password_hash: password_hash.into(),
        }
    }
}
