// src/routes.rs

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{api, form},
    state::AppState,
    utils::session::session_middleware,
};

/// Assembles the main application router.
///
/// * HTML pages at `/`, `/submit` and `/reset`.
/// * JSON API under `/api/survey`.
/// * Every route runs inside the session middleware, so handlers always see
///   a `SessionId`.
pub fn create_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/", get(form::show_page))
        .route("/submit", post(form::submit_form))
        .route("/reset", post(form::reset_form));

    let api_routes = Router::new()
        .route("/", get(api::get_state))
        .route("/schema", get(api::get_schema))
        .route("/submit", post(api::submit_survey))
        .route("/reset", post(api::reset_survey))
        .route("/summary", get(api::get_summary))
        .route("/stored", get(api::get_stored));

    Router::new()
        .merge(page_routes)
        .nest("/api/survey", api_routes)
        // Global Middleware (applied from outside in)
        .layer(middleware::from_fn(session_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
