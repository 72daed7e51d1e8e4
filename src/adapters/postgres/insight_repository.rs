//! PostgreSQL adapter for InsightRepository.
//!
//! The `industry_insights.industry` UNIQUE constraint declared in the
//! migrations is what arbitrates concurrent creation; this adapter only
//! translates that violation into the distinguishable port error.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{Industry, IndustryInsightId};
use crate::domain::insight::{IndustryInsight, InsightPayload, NewIndustryInsight};
use crate::ports::{InsightRepository, RepositoryError};

use super::map_sqlx_err;

/// PostgreSQL implementation of InsightRepository.
pub struct PgInsightRepository {
    pool: PgPool,
}

impl PgInsightRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn from_row(row: &PgRow) -> Result<IndustryInsight, RepositoryError> {
        let id: Uuid = row.get("id");
        let industry: String = row.get("industry");
        let payload: serde_json::Value = row.get("payload");
        let next_update: chrono::DateTime<chrono::Utc> = row.get("next_update");
        let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

        let industry = Industry::new(industry)
            .map_err(|e| RepositoryError::database(format!("Invalid industry column: {}", e)))?;
        let payload = match payload {
            serde_json::Value::Object(fields) => InsightPayload::new(fields),
            other => {
                return Err(RepositoryError::database(format!(
                    "Payload column is not a JSON object: {}",
                    other
                )))
            }
        };

        Ok(IndustryInsight {
            id: IndustryInsightId::from_uuid(id),
            industry,
            payload,
            next_update,
            created_at,
        })
    }
}

#[async_trait]
impl InsightRepository for PgInsightRepository {
    async fn find_by_industry(
        &self,
        industry: &Industry,
    ) -> Result<Option<IndustryInsight>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM industry_insights WHERE industry = $1")
            .bind(industry.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        match row {
            Some(row) => Ok(Some(Self::from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, insight: NewIndustryInsight) -> Result<IndustryInsight, RepositoryError> {
        let payload = serde_json::Value::Object(insight.payload.as_object().clone());

        let row = sqlx::query(
            r#"
            INSERT INTO industry_insights (id, industry, payload, next_update, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING *
            "#,
        )
        .bind(IndustryInsightId::new().as_uuid())
        .bind(insight.industry.as_str())
        .bind(payload)
        .bind(insight.next_update)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Self::from_row(&row)
    }
}
