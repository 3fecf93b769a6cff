// SPDX-License-Identifier: MIT

//! Login routes.
//!
//! One login endpoint serves both roles. Coaches sign in with a username and
//! password (stored as a SHA-256 digest); clients sign in with their username
//! and coach-issued passport code. Either way the response carries a JWT and
//! the reduced user identity.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::middleware::auth::create_jwt;
use crate::models::{User, UserRole};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/auth/login", post(login))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub role: UserRole,
    /// Username for either role
    pub identifier: String,
    /// Password (coach) or passport code (client)
    pub secret: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Authenticate and issue a session token.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let user = state
        .store
        .authenticate(&body.identifier, &body.secret, body.role)
        .ok_or(AppError::InvalidCredentials)?;

    let token = create_jwt(&user.id, user.role, &state.config.jwt_signing_key)?;

    tracing::info!(user_id = %user.id, role = ?user.role, "Login successful");

    Ok(Json(LoginResponse { token, user }))
}
