pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{NewSubmission, Submission};

use memory::MemoryStore;
use postgres::PostgresStore;

#[derive(Debug)]
pub enum StoreError {
    /// The backing schema is missing (e.g. migrations never ran against a
    /// freshly provisioned database).
    Unprovisioned,
    Database(sqlx::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unprovisioned => write!(f, "waitlist store is not provisioned"),
            StoreError::Database(err) => write!(f, "database error: {err}"),
        }
    }
}

#[derive(Debug)]
pub enum AddOutcome {
    Created(Submission),
    Duplicate,
}

#[async_trait]
pub trait WaitlistStore: Send + Sync {
    async fn add(&self, input: NewSubmission) -> Result<AddOutcome, StoreError>;
    async fn list_recent(&self, limit: i64) -> Result<Vec<Submission>, StoreError>;
}

/// Primary Postgres store with an in-memory fallback.
///
/// The fallback covers two cases: no `DATABASE_URL` configured at all, and a
/// configured database whose waitlist table is missing. Either way local/dev
/// keeps working without provisioning anything.
pub struct Stores {
    primary: Option<PostgresStore>,
    demo: MemoryStore,
}

impl Stores {
    pub fn new(pool: Option<PgPool>) -> Self {
        Self {
            primary: pool.map(PostgresStore::new),
            demo: MemoryStore::new(),
        }
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    pub async fn add(&self, input: NewSubmission) -> Result<AddOutcome, StoreError> {
        match &self.primary {
            Some(primary) => match primary.add(input.clone()).await {
                Err(StoreError::Unprovisioned) => {
                    tracing::warn!(
                        "Waitlist table missing, falling back to the in-memory store"
                    );
                    self.demo.add(input).await
                }
                other => other,
            },
            None => self.demo.add(input).await,
        }
    }

    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Submission>, StoreError> {
        match &self.primary {
            Some(primary) => match primary.list_recent(limit).await {
                Err(StoreError::Unprovisioned) => {
                    tracing::warn!(
                        "Waitlist table missing, falling back to the in-memory store"
                    );
                    self.demo.list_recent(limit).await
                }
                other => other,
            },
            None => self.demo.list_recent(limit).await,
        }
    }
}
