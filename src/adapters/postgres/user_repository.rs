//! PostgreSQL adapter for UserRepository.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::time::Duration;
use uuid::Uuid;

use crate::domain::foundation::{CallerIdentity, Industry, UserProfileId};
use crate::domain::user::{ProfileFields, UserProfile};
use crate::ports::{RepositoryError, UserRepository};

use super::map_sqlx_err;

/// PostgreSQL implementation of UserRepository.
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a profile from a database row.
    fn from_row(row: &PgRow) -> Result<UserProfile, RepositoryError> {
        let id: Uuid = row.get("id");
        let identity: String = row.get("identity");
        let industry: Option<String> = row.get("industry");
        let experience: i32 = row.get("experience");
        let bio: Option<String> = row.get("bio");
        let skills: Vec<String> = row.get("skills");
        let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
        let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

        let identity = CallerIdentity::new(identity)
            .map_err(|e| RepositoryError::database(format!("Invalid identity column: {}", e)))?;
        let industry = industry
            .map(Industry::new)
            .transpose()
            .map_err(|e| RepositoryError::database(format!("Invalid industry column: {}", e)))?;

        Ok(UserProfile {
            id: UserProfileId::from_uuid(id),
            identity,
            industry,
            experience,
            bio,
            skills,
            created_at,
            updated_at,
        })
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_identity(
        &self,
        identity: &CallerIdentity,
    ) -> Result<Option<UserProfile>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM users WHERE identity = $1")
            .bind(identity.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        match row {
            Some(row) => Ok(Some(Self::from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn update_profile(
        &self,
        id: UserProfileId,
        fields: &ProfileFields,
        timeout: Duration,
    ) -> Result<UserProfile, RepositoryError> {
        // Single-statement write: one row, all four fields, atomic by
        // construction. RETURNING yields the post-update snapshot.
        let write = sqlx::query(
            r#"
            UPDATE users
            SET industry = $2,
                experience = $3,
                bio = $4,
                skills = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id.as_uuid())
        .bind(fields.industry.as_str())
        .bind(fields.experience)
        .bind(fields.bio.as_deref())
        .bind(&fields.skills)
        .fetch_optional(&self.pool);

        let row = tokio::time::timeout(timeout, write)
            .await
            .map_err(|_| RepositoryError::Timeout {
                timeout_secs: timeout.as_secs(),
            })?
            .map_err(map_sqlx_err)?;

        match row {
            Some(row) => Self::from_row(&row),
            None => Err(RepositoryError::database(format!(
                "No profile row for id {}",
                id
            ))),
        }
    }
}
