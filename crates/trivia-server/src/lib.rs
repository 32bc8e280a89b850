//! Trivia server library logic.

pub mod api;
pub mod api_categories;
pub mod api_questions;
pub mod api_quiz;
pub mod config;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::{delete, get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use trivia_db::DbPool;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
}

/// Maximum request body size (64 KiB). Every request body is a small JSON
/// object.
const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

/// Health check handler.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/categories", get(api_categories::list_categories_handler))
        .route(
            "/categories/{categoryId}",
            get(api_categories::category_questions_handler),
        )
        .route(
            "/questions",
            get(api_questions::list_questions_handler).post(api_questions::search_questions_handler),
        )
        .route(
            "/questions/{questionId}",
            delete(api_questions::delete_question_handler),
        )
        .route("/add", post(api_questions::add_question_handler))
        .route("/play", post(api_quiz::play_handler))
        .fallback(api::not_found_handler)
        .method_not_allowed_fallback(api::method_not_allowed_handler)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(Extension(Arc::new(state)))
}
