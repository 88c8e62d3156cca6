use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::error::AppError;
use crate::state::SharedState;
use crate::waitlist::pipeline::{self, PipelineOutcome};

pub async fn submit(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let outcome = pipeline::run(&state, &headers, Some(addr.ip()), &body).await?;

    let response = match outcome {
        PipelineOutcome::Accepted => (
            StatusCode::OK,
            Json(json!({ "ok": true, "status": "accepted" })),
        ),
        PipelineOutcome::Duplicate => (
            StatusCode::CONFLICT,
            Json(json!({ "ok": false, "error": "duplicate" })),
        ),
        PipelineOutcome::Created(submission) => (
            StatusCode::OK,
            Json(json!({ "ok": true, "status": "created", "submission": submission })),
        ),
    };

    Ok(response)
}
