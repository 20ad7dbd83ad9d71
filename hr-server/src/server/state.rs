use std::sync::Arc;

use crate::db::Database;
use crate::server::{Config, JwtService};

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Database,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    pub fn initialize(config: &Config) -> Self {
        Self {
            config: config.clone(),
            db: Database::new(),
            jwt_service: Arc::new(JwtService::with_config(config.jwt.clone())),
        }
    }

    pub fn get_db(&self) -> Database {
        self.db.clone()
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
