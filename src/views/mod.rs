pub mod admin;
pub mod landing;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(landing::index))
        .route("/admin", get(admin::index))
}
