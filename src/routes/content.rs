use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::state::SharedState;

pub async fn landing(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let content = match &state.cms {
        Some(cms) => cms.landing_content().await,
        None => None,
    };

    Json(json!({ "result": content }))
}
