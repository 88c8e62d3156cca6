use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::auth::AdminAccess;
use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;

pub const DEFAULT_LIST_LIMIT: i64 = 50;

#[derive(Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub q: Option<String>,
}

pub async fn list_waitlist(
    _admin: AdminAccess,
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, DEFAULT_LIST_LIMIT);

    let submissions = state.stores.list_recent(limit).await?;
    let filtered = filter_submissions(submissions, params.q.as_deref());
    let count = filtered.len();

    Ok(Json(json!({
        "submissions": filtered,
        "count": count,
    })))
}

/// Case-insensitive substring match over email, name, and message. The
/// filter runs over the already-fetched recent page, not the whole table.
pub fn filter_submissions(submissions: Vec<Submission>, q: Option<&str>) -> Vec<Submission> {
    let Some(q) = q.map(str::trim).filter(|q| !q.is_empty()) else {
        return submissions;
    };
    let needle = q.to_lowercase();

    submissions
        .into_iter()
        .filter(|s| {
            let haystack = format!(
                "{} {} {}",
                s.email,
                s.name.as_deref().unwrap_or(""),
                s.message.as_deref().unwrap_or("")
            )
            .to_lowercase();
            haystack.contains(&needle)
        })
        .collect()
}
