//! Authentication Routes

use axum::{Router, routing::get, routing::post};

use crate::handler::auth;
use crate::server::ServerState;

/// Build authentication router
/// - /api/login, /api/register: public (no auth required)
/// - /api/user, /api/logout: protected (require auth)
pub fn router() -> Router<ServerState> {
    Router::new()
        // Public routes - no auth middleware applied
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        // Protected routes - require authentication
        .route("/api/user", get(auth::me))
        .route("/api/logout", post(auth::logout))
}
