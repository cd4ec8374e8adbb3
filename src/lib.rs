use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::server::Settings;

pub mod config;
pub mod modules;

#[derive(Clone)]
pub struct AppState {
    pub environment: Arc<str>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            environment: Arc::from(settings.environment.as_str()),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(modules::environment::routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
