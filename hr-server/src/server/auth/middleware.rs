//! Authentication Middleware
//!
//! Extracts and validates the JWT bearer token on every API request
//! and injects the resulting [`CurrentUser`] into request extensions.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::common::AppError;
use crate::security_log;
use crate::server::ServerState;
use crate::server::auth::{CurrentUser, JwtError, JwtService};

/// Require authentication middleware
///
/// Every `/api/*` route except the login and register endpoints
/// requires a valid bearer token.
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // Allow OPTIONS requests for CORS preflight (skip auth)
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Skip auth for non-API routes (let them return 404 normally)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    // Skip auth for public API routes
    let is_public_api_route = path == "/api/login" || path == "/api/register";
    if is_public_api_route {
        return Ok(next.run(req).await);
    }

    let jwt_service = state.get_jwt_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header).ok_or(AppError::InvalidToken)?,
        None => {
            security_log!(WARN, "auth_missing", uri = ?req.uri());
            return Err(AppError::Unauthorized);
        }
    };

    match jwt_service
        .validate_token(token)
        .and_then(CurrentUser::try_from)
    {
        Ok(user) => {
            tracing::debug!(
                user_id = %user.id,
                username = %user.username,
                role = %user.role,
                "User authenticated successfully"
            );

            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(WARN, "auth_failed", error = %e, uri = ?req.uri());

            match e {
                JwtError::ExpiredToken => Err(AppError::TokenExpired),
                _ => Err(AppError::InvalidToken),
            }
        }
    }
}
