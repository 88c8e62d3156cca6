use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::state::SharedState;

/// Proof that the caller presented the configured admin token.
#[derive(Debug, Clone)]
pub struct AdminAccess;

/// Constant-time token comparison.
pub fn token_matches(provided: &str, configured: &str) -> bool {
    provided.as_bytes().ct_eq(configured.as_bytes()).into()
}

fn token_from_parts(parts: &Parts) -> Option<String> {
    if let Some(value) = parts.headers.get("authorization") {
        if let Ok(s) = value.to_str() {
            if let Some(token) = s.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    // The admin page passes the token along as a query parameter
    parts.uri.query().and_then(|query| {
        form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == "token")
            .map(|(_, v)| v.into_owned())
    })
}

impl FromRequestParts<SharedState> for AdminAccess {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let Some(configured) = state.config.admin_token.as_deref() else {
            return Err(AppError::NotFound("Admin is disabled".to_string()));
        };

        let provided = token_from_parts(parts)
            .ok_or_else(|| AppError::Unauthorized("Missing admin token".to_string()))?;

        if !token_matches(&provided, configured) {
            return Err(AppError::Unauthorized("Invalid admin token".to_string()));
        }

        Ok(AdminAccess)
    }
}
