use axum::{routing::get, Router};

use crate::modules::environment::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(controller::show_environment))
}
