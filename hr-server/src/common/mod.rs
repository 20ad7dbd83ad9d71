//! Shared infrastructure: errors, extractors, logging

pub mod error;
pub mod extract;
pub mod logger;

pub use error::{AppError, AppResponse, AppResult, ok};
pub use extract::ValidJson;
pub use logger::{init_logger, init_logger_with_file};
