use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored waitlist entry. Emails are lowercased before storage and
/// unique across the table.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// A validated submission ready to be stored. `metadata` only ever carries
/// the UTM attribution keys.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub email: String,
    pub name: Option<String>,
    pub message: Option<String>,
    pub metadata: Option<serde_json::Value>,
}
