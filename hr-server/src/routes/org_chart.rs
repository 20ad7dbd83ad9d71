//! Org-Chart Route

use axum::{Router, routing::get};

use crate::handler::org_chart;
use crate::server::ServerState;

/// Org-chart router - requires authentication
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/org-chart", get(org_chart::get))
}
