use axum::extract::State;

use crate::AppState;

pub async fn show_environment(State(state): State<AppState>) -> String {
    format!("Environment: {}", state.environment)
}
