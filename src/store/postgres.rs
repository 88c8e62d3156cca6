use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{NewSubmission, Submission};

use super::{AddOutcome, StoreError, WaitlistStore};

/// Postgres `undefined_table` error code.
const UNDEFINED_TABLE: &str = "42P01";

pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.code().as_deref() == Some(UNDEFINED_TABLE) {
            return StoreError::Unprovisioned;
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl WaitlistStore for PostgresStore {
    async fn add(&self, input: NewSubmission) -> Result<AddOutcome, StoreError> {
        let submission = Submission {
            id: Uuid::now_v7(),
            email: input.email.to_lowercase(),
            name: input.name,
            message: input.message,
            metadata: input.metadata,
            created_at: Utc::now(),
        };

        let result = sqlx::query(
            "INSERT INTO waitlist_submissions (id, email, name, message, metadata, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(submission.id)
        .bind(&submission.email)
        .bind(&submission.name)
        .bind(&submission.message)
        .bind(&submission.metadata)
        .bind(submission.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(AddOutcome::Created(submission)),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Ok(AddOutcome::Duplicate)
            }
            Err(e) => Err(map_error(e)),
        }
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Submission>, StoreError> {
        sqlx::query_as::<_, Submission>(
            "SELECT id, email, name, message, metadata, created_at
             FROM waitlist_submissions
             ORDER BY created_at DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_error)
    }
}
