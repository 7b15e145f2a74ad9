// src/routes/mod.rs
pub mod gemini;

use std::path::Path;

use crate::state::SharedState;
use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    routing::{get, post},
};
use gemini::gemini_handler;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router(static_dir: impl AsRef<Path>) -> Router<SharedState> {
    // Anything the routes below don't take, wrong method included, ends up here.
    let static_files = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(not_found.into_service());

    Router::new()
        .route(
            "/gemini",
            post(gemini_handler).fallback_service(static_files.clone()),
        )
        .route(
            "/health",
            get(|| async { "ok" }).fallback_service(static_files.clone()),
        )
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
