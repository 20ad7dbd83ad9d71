//! HR Edge Server
//!
//! Small HR-administration service: worker records, reporting-line
//! hierarchy, leave permits and authenticated access, served as a JSON
//! API.
//!
//! # Module structure
//!
//! ```text
//! hr-server/src/
//! ├── server/     # Server, Config, ServerState, JWT auth, middleware
//! ├── routes/     # routers per resource + app assembly
//! ├── handler/    # HTTP handlers
//! ├── common/     # errors, extractors, logging
//! ├── db/         # in-memory entity store (tables, models, repositories)
//! └── hierarchy   # pure org-chart derivations
//! ```

pub mod common;
pub mod db;
pub mod handler;
pub mod hierarchy;
pub mod routes;
pub mod server;

// Re-export public types
pub use common::{AppError, AppResult};
pub use db::Database;
pub use server::{Config, CurrentUser, JwtService, Server, ServerState};

// Re-export logger functions
pub use common::logger::{init_logger, init_logger_with_file};

// Audit logging macro - account lifecycle events land in the "audit" target
#[macro_export]
macro_rules! audit_log {
    ($user_id:expr, $action:expr, $detail:expr) => {
        tracing::info!(
            target: "audit",
            user_id = %$user_id,
            action = $action,
            detail = %$detail
        );
    };
}

// Security logging macro - supports tracing format specifiers
#[macro_export]
macro_rules! security_log {
    ($level:ident, $event:expr, $($fields:tt)*) => {
        tracing::warn!(
            target: "security",
            event = $event,
            $($fields)*
        );
    };
}
