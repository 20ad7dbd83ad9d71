//! Health Route

use axum::{Router, routing::get};

use crate::handler::health;
use crate::server::ServerState;

/// Public health probe
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health::check))
}
