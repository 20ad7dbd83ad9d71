//! Worker Routes

use axum::{
    Router,
    routing::{get, put},
};

use crate::handler::workers;
use crate::server::ServerState;

/// Worker router - requires authentication
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/workers", get(workers::list).post(workers::create))
        .route(
            "/api/workers/{id}",
            put(workers::update).delete(workers::delete),
        )
}
