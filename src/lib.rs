pub mod auth;
pub mod cms;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod notify;
pub mod rate_limit;
pub mod routes;
pub mod state;
pub mod store;
pub mod views;
pub mod waitlist;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use sqlx::PgPool;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::cms::SanityClient;
use crate::config::Config;
use crate::notify::{DiscordNotifier, NotifierRegistry, PosthogNotifier};
use crate::rate_limit::WaitlistRateLimiter;
use crate::state::{AppState, SharedState};
use crate::store::Stores;

pub fn build_app(pool: Option<PgPool>, config: Config) -> (Router, SharedState) {
    // Register notifiers for the integrations that are configured
    let mut notifiers = NotifierRegistry::new();
    if let Some(url) = config.discord_webhook_url.clone() {
        notifiers.register(Arc::new(DiscordNotifier::new(url)));
    }
    if let Some(posthog) = config.posthog.clone() {
        notifiers.register(Arc::new(PosthogNotifier::new(posthog)));
    }

    let cms = config.sanity.clone().map(SanityClient::new);

    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        stores: Stores::new(pool),
        notifiers,
        cms,
        limiter: WaitlistRateLimiter::new(),
        config,
    });

    let app = Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .route("/health", axum::routing::get(health))
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state.clone());

    (app, state)
}

async fn health() -> &'static str {
    "ok"
}
