use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use crate::auth;
use crate::error::AppError;
use crate::routes::admin::{filter_submissions, DEFAULT_LIST_LIMIT};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct AdminParams {
    pub token: Option<String>,
    pub q: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/disabled.html")]
struct DisabledTemplate;

#[derive(Template)]
#[template(path = "admin/login.html")]
struct LoginTemplate;

#[derive(Template)]
#[template(path = "admin/list.html")]
struct ListTemplate {
    token: String,
    q: String,
    count: usize,
    rows: Vec<Row>,
}

struct Row {
    email: String,
    name: String,
    message: String,
    created_at: String,
}

pub async fn index(
    State(state): State<SharedState>,
    Query(params): Query<AdminParams>,
) -> Result<Response, AppError> {
    let Some(configured) = state.config.admin_token.as_deref() else {
        return Ok(Html(DisabledTemplate.render().unwrap_or_default()).into_response());
    };

    let token = params.token.unwrap_or_default();
    if token.is_empty() || !auth::token_matches(&token, configured) {
        return Ok(Html(LoginTemplate.render().unwrap_or_default()).into_response());
    }

    let submissions = state.stores.list_recent(DEFAULT_LIST_LIMIT).await?;
    let q = params.q.unwrap_or_default();
    let filtered = filter_submissions(submissions, Some(&q));

    let rows: Vec<Row> = filtered
        .into_iter()
        .map(|s| Row {
            email: s.email,
            name: s.name.unwrap_or_else(|| "-".to_string()),
            message: s.message.unwrap_or_else(|| "-".to_string()),
            created_at: s.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        })
        .collect();
    let count = rows.len();

    let template = ListTemplate {
        token,
        q,
        count,
        rows,
    };
    Ok(Html(template.render().unwrap_or_default()).into_response())
}
