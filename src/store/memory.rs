use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::{NewSubmission, Submission};

use super::{AddOutcome, StoreError, WaitlistStore};

/// In-memory demo store. Contents are lost on restart; intended for local
/// development and as the fallback when Postgres is unprovisioned.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    emails: HashSet<String>,
    /// Newest first.
    submissions: Vec<Submission>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }
}

#[async_trait]
impl WaitlistStore for MemoryStore {
    async fn add(&self, input: NewSubmission) -> Result<AddOutcome, StoreError> {
        let email = input.email.to_lowercase();
        let mut inner = self.inner.lock().expect("memory store lock poisoned");

        if inner.emails.contains(&email) {
            return Ok(AddOutcome::Duplicate);
        }

        let submission = Submission {
            id: Uuid::now_v7(),
            email: email.clone(),
            name: input.name,
            message: input.message,
            metadata: input.metadata,
            created_at: Utc::now(),
        };

        inner.emails.insert(email);
        inner.submissions.insert(0, submission.clone());
        Ok(AddOutcome::Created(submission))
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Submission>, StoreError> {
        let inner = self.inner.lock().expect("memory store lock poisoned");
        Ok(inner
            .submissions
            .iter()
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}
