use axum::{extract::State, Json};
use tracing::info;

use crate::state::AppState;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<bool> {
    info!(
        instance_id = %state.instance_id,
        "Instance ID {}: Health check OK", state.instance_id
    );
    Json(true)
}
