//! Entity Models

pub mod permit;
pub mod serde_helpers;
pub mod user;
pub mod worker;

pub use permit::{Permit, PermitCreate, PermitStatus, PermitType, PermitUpdate};
pub use user::{User, UserCreate};
pub use worker::{Worker, WorkerCreate, WorkerUpdate};
