use axum::extract::State;
use axum::Json;

use crate::diagnostics::Diagnostics;
use crate::state::SharedState;

pub async fn show(State(state): State<SharedState>) -> Json<Diagnostics> {
    Json(Diagnostics::from_config(&state.config))
}
