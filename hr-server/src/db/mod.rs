//! In-memory entity store
//!
//! The [`Database`] owns the canonical copy of every entity table.
//! All reads operate on cloned snapshots; all mutations go through the
//! repository layer, which applies cross-field validation before
//! touching a table.

pub mod models;
pub mod repository;
pub mod table;

use std::sync::Arc;

use models::{Permit, User, Worker};
use table::Table;

struct Tables {
    users: Table<User>,
    workers: Table<Worker>,
    permits: Table<Permit>,
}

/// Shared handle to the entity tables. Cheap to clone.
#[derive(Clone)]
pub struct Database {
    inner: Arc<Tables>,
}

impl Database {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Tables {
                users: Table::new(),
                workers: Table::new(),
                permits: Table::new(),
            }),
        }
    }

    pub fn users(&self) -> &Table<User> {
        &self.inner.users
    }

    pub fn workers(&self) -> &Table<Worker> {
        &self.inner.workers
    }

    pub fn permits(&self) -> &Table<Permit> {
        &self.inner.permits
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}
