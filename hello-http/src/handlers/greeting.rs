use axum::extract::State;

use crate::state::AppState;

/// GET /
pub async fn greeting(State(state): State<AppState>) -> &'static str {
    state.greeting_service.greeting()
}
