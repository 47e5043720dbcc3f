//! Axum router configuration with middleware.
//!
//! JSON API under `/api/`, pages at `/` and `/chat`.
//! Middleware: CORS, tracing.

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // CRM
        .route("/persons", get(handlers::persons::list_persons))
        .route("/persons/{id}", delete(handlers::persons::delete_person))
        .route("/deals", get(handlers::deals::list_deals))
        // OAuth
        .route("/auth", get(handlers::auth::start))
        .route("/auth/callback", get(handlers::auth::callback))
        // Chat proxy
        .route("/llm", post(handlers::chat::send_message));

    Router::new()
        .nest("/api", api_routes)
        .route("/", get(handlers::pages::dashboard))
        .route("/chat", get(handlers::pages::chat))
        .route("/health", get(health_check))
        .fallback(handlers::pages::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Liveness check.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
