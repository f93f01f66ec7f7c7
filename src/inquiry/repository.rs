//! Inquiry repository.
//!
//! Pure persistence: nothing here triggers notifications.

use chrono::{DateTime, Utc};

use super::types::{format_timestamp, Inquiry, InquiryId, NewInquiry};
use crate::db::DbPool;
use crate::{DeskError, Result};

/// Repository for inquiry operations.
pub struct InquiryRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> InquiryRepository<'a> {
    /// Create a new InquiryRepository with the given pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Validate and store a new inquiry.
    ///
    /// The ID and creation time are assigned here. The creation time is
    /// clamped to the latest stored one, so it never decreases with
    /// insertion order even if the system clock steps backwards.
    pub async fn create(&self, new_inquiry: &NewInquiry) -> Result<Inquiry> {
        let fields = new_inquiry.validate()?;
        let id = InquiryId::generate();
        let now = format_timestamp(&Utc::now());

        let created_at: String = sqlx::query_scalar(
            "INSERT INTO inquiries (id, name, email, phone, country_code, message, created_at)
             VALUES (?, ?, ?, ?, ?, ?,
                     MAX(?, COALESCE((SELECT MAX(created_at) FROM inquiries), '')))
             RETURNING created_at",
        )
        .bind(id.as_str())
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(&fields.country_code)
        .bind(&fields.message)
        .bind(&now)
        .fetch_one(self.pool)
        .await?;

        Ok(Inquiry {
            id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            country_code: fields.country_code,
            message: fields.message,
            created_at: parse_timestamp(&created_at)?,
        })
    }

    /// List all inquiries, most recent first.
    pub async fn list_recent(&self) -> Result<Vec<Inquiry>> {
        let rows = sqlx::query_as::<_, InquiryRow>(
            "SELECT id, name, email, phone, country_code, message, created_at
             FROM inquiries
             ORDER BY created_at DESC, rowid DESC",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(InquiryRow::into_inquiry).collect()
    }

    /// Get an inquiry by ID.
    pub async fn get_by_id(&self, id: &InquiryId) -> Result<Inquiry> {
        let row = sqlx::query_as::<_, InquiryRow>(
            "SELECT id, name, email, phone, country_code, message, created_at
             FROM inquiries WHERE id = ?",
        )
        .bind(id.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.ok_or_else(|| DeskError::NotFound("inquiry".to_string()))?
            .into_inquiry()
    }

    /// Delete an inquiry by ID.
    ///
    /// Not idempotent: deleting an absent ID is `NotFound`.
    pub async fn delete_by_id(&self, id: &InquiryId) -> Result<()> {
        let result = sqlx::query("DELETE FROM inquiries WHERE id = ?")
            .bind(id.as_str())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DeskError::NotFound("inquiry".to_string()));
        }
        Ok(())
    }

    /// Count stored inquiries.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inquiries")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

/// Raw database row for an inquiry.
#[derive(sqlx::FromRow)]
struct InquiryRow {
    id: String,
    name: String,
    email: String,
    phone: String,
    country_code: String,
    message: String,
    created_at: String,
}

impl InquiryRow {
    fn into_inquiry(self) -> Result<Inquiry> {
        Ok(Inquiry {
            id: InquiryId::from(self.id),
            name: self.name,
            email: self.email,
            phone: self.phone,
            country_code: self.country_code,
            message: self.message,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DeskError::Internal(format!("corrupt inquiry timestamp {s:?}: {e}")))
}
