//! API Routes

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Auth
        .route("/auth/login", post(handlers::login))
        // Account routes
        .route("/contas", post(handlers::create_conta))
        .route("/contas/:id", get(handlers::get_conta))
        // Transaction routes
        .route("/transacoes/contas/:id", post(handlers::create_transacao))
        .route("/transacoes/contas/:id/extrato", get(handlers::get_extrato))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
