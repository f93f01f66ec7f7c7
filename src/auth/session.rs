//! Stateless administrator sessions.
//!
//! A session is a signed JWT carrying the administrator ID. Nothing is
//! persisted: validity depends only on the signature and the expiry claim.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::db::AdministratorId;
use crate::{DeskError, Result};

/// Fixed session lifetime (2 hours).
pub const SESSION_LIFETIME_SECS: i64 = 2 * 60 * 60;

/// JWT claims structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (administrator ID).
    pub sub: AdministratorId,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
    /// JWT ID (unique identifier).
    pub jti: String,
}

/// A freshly issued session token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Opaque bearer token.
    pub token: String,
    /// Seconds until the token expires.
    pub expires_in: i64,
}

/// Issues and verifies session tokens.
#[derive(Clone)]
pub struct SessionIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionIssuer {
    /// Create an issuer from a shared secret.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issue a token for the administrator, valid for two hours from now.
    pub fn issue(&self, admin_id: AdministratorId) -> Result<IssuedToken> {
        self.issue_at(admin_id, Utc::now())
    }

    /// Issue a token as if it had been issued at `issued_at`.
    pub fn issue_at(&self, admin_id: AdministratorId, issued_at: DateTime<Utc>) -> Result<IssuedToken> {
        let iat = issued_at.timestamp();
        let claims = SessionClaims {
            sub: admin_id,
            iat,
            exp: iat + SESSION_LIFETIME_SECS,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| DeskError::Internal(format!("failed to encode session token: {e}")))?;

        Ok(IssuedToken {
            token,
            expires_in: SESSION_LIFETIME_SECS,
        })
    }

    /// Verify a token and return the administrator it was issued to.
    ///
    /// Any failure (bad signature, malformed, expired) is `Unauthorized`.
    pub fn verify(&self, token: &str) -> Result<AdministratorId> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|e| {
                debug!("Session token rejected: {}", e);
                DeskError::Unauthorized("invalid or expired token".to_string())
            })
    }
}
