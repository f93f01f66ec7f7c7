//! Credential store for the single administrator identity.

use std::sync::OnceLock;

use tracing::{info, warn};

use super::password::{hash_password, validate_password, verify_password};
use crate::db::{AdministratorId, AdministratorRepository, NewAdministrator};
use crate::{Database, DeskError, Result};

/// Maximum length of a login identifier.
pub const MAX_LOGIN_LENGTH: usize = 254;

const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Hash compared against when the login is unknown, so both failure
/// paths spend the same time in Argon2.
static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

fn dummy_hash() -> Option<&'static str> {
    DUMMY_HASH
        .get_or_init(|| hash_password("inquirydesk-dummy-secret").ok())
        .as_deref()
}

/// Holds the administrator identity and verifies candidate secrets.
#[derive(Clone)]
pub struct CredentialStore {
    db: Database,
    registration_enabled: bool,
}

impl CredentialStore {
    /// Create a credential store backed by the given database.
    pub fn new(db: Database) -> Self {
        Self {
            db,
            registration_enabled: true,
        }
    }

    /// Enable or disable the registration operation.
    pub fn with_registration_enabled(mut self, enabled: bool) -> Self {
        self.registration_enabled = enabled;
        self
    }

    /// Register the administrator.
    ///
    /// Fails with `InvalidInput` on an empty login or a secret outside the
    /// length policy, with `Conflict` when an administrator already exists,
    /// and with `Unauthorized` when registration is disabled.
    pub async fn register(&self, login: &str, secret: &str) -> Result<AdministratorId> {
        if !self.registration_enabled {
            return Err(DeskError::Unauthorized(
                "administrator registration is disabled".to_string(),
            ));
        }

        let login = normalize_login(login)?;
        validate_password(secret)?;

        let hash = hash_blocking(secret.to_string()).await?;
        let repo = AdministratorRepository::new(self.db.pool());
        let admin = repo.create(&NewAdministrator::new(login, hash)).await?;

        info!(admin_id = admin.id, "Administrator registered");
        Ok(admin.id)
    }

    /// Verify a login/secret pair and return the administrator ID.
    ///
    /// Unknown logins and wrong secrets fail identically with `Unauthorized`.
    pub async fn verify(&self, login: &str, candidate: &str) -> Result<AdministratorId> {
        let repo = AdministratorRepository::new(self.db.pool());
        let admin = repo.get_by_login(login.trim()).await?;

        let Some(admin) = admin else {
            let candidate = candidate.to_string();
            let _ = tokio::task::spawn_blocking(move || {
                if let Some(hash) = dummy_hash() {
                    let _ = verify_password(&candidate, hash);
                }
            })
            .await;
            return Err(DeskError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        match verify_blocking(candidate.to_string(), admin.password_hash).await {
            Ok(true) => Ok(admin.id),
            Ok(false) => Err(DeskError::Unauthorized(INVALID_CREDENTIALS.to_string())),
            Err(e) => {
                warn!(admin_id = admin.id, error = %e, "Stored password hash could not be checked");
                Err(DeskError::Unauthorized(INVALID_CREDENTIALS.to_string()))
            }
        }
    }

    /// Replace the administrator's secret after checking the current one.
    pub async fn change_secret(
        &self,
        admin_id: AdministratorId,
        current: &str,
        new_secret: &str,
    ) -> Result<()> {
        validate_password(new_secret)?;

        let repo = AdministratorRepository::new(self.db.pool());
        let admin = repo
            .get_by_id(admin_id)
            .await?
            .ok_or_else(|| DeskError::Unauthorized("unknown administrator".to_string()))?;

        if !verify_blocking(current.to_string(), admin.password_hash).await? {
            return Err(DeskError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let hash = hash_blocking(new_secret.to_string()).await?;
        if !repo.update_password_hash(admin_id, &hash).await? {
            return Err(DeskError::Unauthorized("unknown administrator".to_string()));
        }

        info!(admin_id, "Administrator secret changed");
        Ok(())
    }
}

fn normalize_login(login: &str) -> Result<String> {
    let login = login.trim();
    if login.is_empty() {
        return Err(DeskError::InvalidInput("login is required".to_string()));
    }
    if login.chars().count() > MAX_LOGIN_LENGTH {
        return Err(DeskError::InvalidInput(format!(
            "login must be at most {MAX_LOGIN_LENGTH} characters"
        )));
    }
    Ok(login.to_string())
}

async fn hash_blocking(secret: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&secret))
        .await
        .map_err(|e| DeskError::Internal(format!("hashing task failed: {e}")))?
        .map_err(DeskError::from)
}

/// Returns Ok(false) on a mismatch and Err only if the hash itself is unusable.
async fn verify_blocking(candidate: String, hash: String) -> Result<bool> {
    let outcome = tokio::task::spawn_blocking(move || verify_password(&candidate, &hash))
        .await
        .map_err(|e| DeskError::Internal(format!("verification task failed: {e}")))?;

    match outcome {
        Ok(()) => Ok(true),
        Err(super::PasswordError::VerificationFailed) => Ok(false),
        Err(e) => Err(DeskError::from(e)),
    }
}
