use std::net::IpAddr;

use axum::http::HeaderMap;

use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;
use crate::store::AddOutcome;

use super::client_ip;
use super::honeypot;
use super::parser;
use super::schema;

pub enum PipelineOutcome {
    /// Honeypot tripped: pretend success so bots get no feedback.
    Accepted,
    Created(Submission),
    Duplicate,
}

/// The waitlist submission pipeline: rate limit, parse, validate, honeypot,
/// store, then fire best-effort notifications.
pub async fn run(
    state: &SharedState,
    headers: &HeaderMap,
    peer_addr: Option<IpAddr>,
    body: &[u8],
) -> Result<PipelineOutcome, AppError> {
    let ip = client_ip::resolve(headers, peer_addr, &state.config.trusted_proxies);

    if let Err(retry_after_secs) = state.limiter.check(
        ip,
        state.config.rate_limit,
        state.config.rate_limit_window_secs,
    ) {
        return Err(AppError::RateLimited { retry_after_secs });
    }

    let content_type = headers.get("content-type").and_then(|v| v.to_str().ok());
    let raw = parser::parse_body(content_type, body).map_err(AppError::BadRequest)?;

    let input = schema::parse(&raw).map_err(AppError::Validation)?;

    if honeypot::is_spam(input.company_website.as_deref()) {
        tracing::debug!("Honeypot tripped, silently accepting");
        return Ok(PipelineOutcome::Accepted);
    }

    match state.stores.add(input.submission).await? {
        AddOutcome::Duplicate => Ok(PipelineOutcome::Duplicate),
        AddOutcome::Created(submission) => {
            state.notifiers.dispatch(&submission);
            Ok(PipelineOutcome::Created(submission))
        }
    }
}
