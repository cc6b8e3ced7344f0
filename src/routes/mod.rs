// src/routes/mod.rs
pub mod career;
pub mod chat;

use std::path::Path;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use career::{filter_handler, reset_filter_handler, toggle_bookmark_handler, toggle_expand_handler};
use chat::{clear_handler, page_handler, sample_question_handler, submit_handler, transcript_handler};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router(static_dir: impl AsRef<Path>) -> Router<SharedState> {
    let card_routes = Router::new()
        .route("/{index}/expand", post(toggle_expand_handler))
        .route("/{index}/bookmark", post(toggle_bookmark_handler));

    let filter_routes = Router::new()
        .route("/reset", post(reset_filter_handler))
        .route("/{field}", post(filter_handler));

    Router::new()
        .route("/", get(page_handler))
        .route("/chat", post(submit_handler))
        .route("/clear", post(clear_handler))
        .route("/draft/sample/{index}", post(sample_question_handler))
        .route("/api/transcript", get(transcript_handler))
        .nest("/cards", card_routes)
        .nest("/filter", filter_routes)
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
}
