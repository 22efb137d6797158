pub mod health;
pub mod ui;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/stories", post(handlers::handle_generate_story))
        .route("/api/v1/stories/pdf", post(handlers::handle_download_pdf))
        .with_state(state)
}
