//! User Repository

use super::{RepoError, RepoResult};
use crate::db::Database;
use crate::db::models::{User, UserCreate};

const DEFAULT_ROLE: &str = "employee";

#[derive(Clone)]
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Find user by id
    pub fn find_by_id(&self, id: u32) -> Option<User> {
        self.db.users().get(id)
    }

    /// Find user by username
    pub fn find_by_username(&self, username: &str) -> Option<User> {
        self.db.users().find(|user| user.username == username)
    }

    /// Register a new user. The password is argon2-hashed before it is
    /// stored; duplicate usernames are rejected. The uniqueness check
    /// and the insert run under one table lock, so concurrent
    /// registrations of the same username admit exactly one winner.
    pub fn create(&self, data: UserCreate) -> RepoResult<User> {
        if data.username.trim().is_empty() {
            return Err(RepoError::Validation("Username must not be empty".to_string()));
        }
        if data.password.is_empty() {
            return Err(RepoError::Validation("Password must not be empty".to_string()));
        }

        // argon2 is slow on purpose; hash before taking the table lock
        let password_hash = User::hash_password(&data.password)
            .map_err(|e| RepoError::Internal(format!("Failed to hash password: {}", e)))?;

        self.db.users().insert_checked(
            |rows| {
                if rows.values().any(|user| user.username == data.username) {
                    Err(RepoError::Duplicate(format!(
                        "Username '{}' already exists",
                        data.username
                    )))
                } else {
                    Ok(())
                }
            },
            |id| User {
                id,
                username: data.username.clone(),
                password_hash,
                role: DEFAULT_ROLE.to_string(),
            },
        )
    }
}
