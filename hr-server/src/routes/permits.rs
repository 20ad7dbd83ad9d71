//! Permit Routes

use axum::{
    Router,
    routing::{get, put},
};

use crate::handler::permits;
use crate::server::ServerState;

/// Permit router - requires authentication
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/permits", get(permits::list).post(permits::create))
        .route("/api/permits/{id}", put(permits::update))
}
