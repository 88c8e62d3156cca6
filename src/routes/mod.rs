pub mod admin;
pub mod content;
pub mod diagnostics;
pub mod waitlist;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/waitlist", post(waitlist::submit))
        .route("/api/admin/waitlist", get(admin::list_waitlist))
        .route("/api/content/landing", get(content::landing))
        .route("/api/diagnostics", get(diagnostics::show))
}
