//! Authentication Handlers
//!
//! Handles registration, login, logout and the current-user lookup.

use axum::{Extension, Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::audit_log;
use crate::common::{AppError, AppResponse, ValidJson, ok};
use crate::db::models::{User, UserCreate};
use crate::db::repository::UserRepository;
use crate::server::{CurrentUser, ServerState};

/// Login request payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response with JWT token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User information returned after login
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: u32,
    pub username: String,
    pub role: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
        }
    }
}

/// Register handler
///
/// Creates a new user account and logs it in immediately.
pub async fn register(
    State(state): State<ServerState>,
    ValidJson(req): ValidJson<UserCreate>,
) -> Result<(StatusCode, Json<AppResponse<LoginResponse>>), AppError> {
    let repo = UserRepository::new(state.get_db());
    let username = req.username.clone();
    let user = repo.create(req)?;

    let token = state
        .get_jwt_service()
        .generate_token(&user)
        .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))?;

    audit_log!(user.id, "register", &username);
    tracing::info!(user_id = %user.id, username = %user.username, "User registered");

    let response = LoginResponse {
        token,
        user: UserInfo::from(&user),
    };
    Ok((StatusCode::CREATED, ok(response)))
}

/// Login handler
///
/// Authenticates user credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> Result<Json<AppResponse<LoginResponse>>, AppError> {
    let repo = UserRepository::new(state.get_db());

    let user = repo
        .find_by_username(&req.username)
        .ok_or_else(AppError::invalid_credentials)?;

    let password_valid = user
        .verify_password(&req.password)
        .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))?;

    if !password_valid {
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .get_jwt_service()
        .generate_token(&user)
        .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))?;

    audit_log!(user.id, "login", &user.username);
    tracing::info!(
        user_id = %user.id,
        username = %user.username,
        role = %user.role,
        "User logged in successfully"
    );

    let response = LoginResponse {
        token,
        user: UserInfo::from(&user),
    };
    Ok(ok(response))
}

/// Get current user info
pub async fn me(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<AppResponse<UserInfo>>, AppError> {
    let repo = UserRepository::new(state.get_db());
    let user = repo
        .find_by_id(user.id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.id)))?;
    Ok(ok(UserInfo::from(&user)))
}

/// Logout handler (client-side token invalidation)
///
/// Since JWTs are stateless, logout is handled client-side by removing
/// the token. This endpoint exists for audit logging.
pub async fn logout(
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<AppResponse<()>>, AppError> {
    audit_log!(user.id, "logout", &user.username);
    tracing::info!(user_id = %user.id, username = %user.username, "User logged out");
    Ok(ok(()))
}
