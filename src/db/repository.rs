//! Administrator repository.

use super::admin::{Administrator, AdministratorId, NewAdministrator};
use super::DbPool;
use crate::{DeskError, Result};

/// Repository for the administrator table.
pub struct AdministratorRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> AdministratorRepository<'a> {
    /// Create a new AdministratorRepository with the given pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert the administrator.
    ///
    /// A duplicate login is reported as `Conflict`.
    pub async fn create(&self, new_admin: &NewAdministrator) -> Result<Administrator> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO administrators (login, password_hash) VALUES (?, ?) RETURNING id",
        )
        .bind(&new_admin.login)
        .bind(&new_admin.password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                DeskError::Conflict("administrator already exists".to_string())
            }
            other => DeskError::from(other),
        })?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DeskError::NotFound("administrator".to_string()))
    }

    /// Get the administrator by ID.
    pub async fn get_by_id(&self, id: AdministratorId) -> Result<Option<Administrator>> {
        let admin = sqlx::query_as::<_, Administrator>(
            "SELECT id, login, password_hash, created_at FROM administrators WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(admin)
    }

    /// Get the administrator by login (case-insensitive).
    pub async fn get_by_login(&self, login: &str) -> Result<Option<Administrator>> {
        let admin = sqlx::query_as::<_, Administrator>(
            "SELECT id, login, password_hash, created_at
             FROM administrators WHERE login = ? COLLATE NOCASE",
        )
        .bind(login)
        .fetch_optional(self.pool)
        .await?;
        Ok(admin)
    }

    /// Count administrator records.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM administrators")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Replace the stored password hash.
    ///
    /// Returns false if no administrator has the given ID.
    pub async fn update_password_hash(&self, id: AdministratorId, hash: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE administrators SET password_hash = ? WHERE id = ?")
            .bind(hash)
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let db = setup_db().await;
        let repo = AdministratorRepository::new(db.pool());

        let admin = repo
            .create(&NewAdministrator::new("admin@x.com", "$argon2id$fake"))
            .await
            .unwrap();
        assert_eq!(admin.id, 1);
        assert_eq!(admin.login, "admin@x.com");

        let found = repo.get_by_id(admin.id).await.unwrap().unwrap();
        assert_eq!(found.password_hash, "$argon2id$fake");
        assert!(repo.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_by_login_case_insensitive() {
        let db = setup_db().await;
        let repo = AdministratorRepository::new(db.pool());
        repo.create(&NewAdministrator::new("Admin@X.com", "hash"))
            .await
            .unwrap();

        assert!(repo.get_by_login("admin@x.com").await.unwrap().is_some());
        assert!(repo.get_by_login("other@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_login_is_conflict() {
        let db = setup_db().await;
        let repo = AdministratorRepository::new(db.pool());
        repo.create(&NewAdministrator::new("admin@x.com", "hash"))
            .await
            .unwrap();

        let result = repo
            .create(&NewAdministrator::new("ADMIN@x.com", "hash2"))
            .await;
        assert!(matches!(result, Err(DeskError::Conflict(_))));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_second_administrator_is_conflict() {
        let db = setup_db().await;
        let repo = AdministratorRepository::new(db.pool());
        repo.create(&NewAdministrator::new("admin@x.com", "hash"))
            .await
            .unwrap();

        let result = repo
            .create(&NewAdministrator::new("someone-else@x.com", "hash"))
            .await;
        assert!(matches!(result, Err(DeskError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_update_password_hash() {
        let db = setup_db().await;
        let repo = AdministratorRepository::new(db.pool());
        let admin = repo
            .create(&NewAdministrator::new("admin@x.com", "old"))
            .await
            .unwrap();

        assert!(repo.update_password_hash(admin.id, "new").await.unwrap());
        let found = repo.get_by_id(admin.id).await.unwrap().unwrap();
        assert_eq!(found.password_hash, "new");

        assert!(!repo.update_password_hash(42, "new").await.unwrap());
    }
}
