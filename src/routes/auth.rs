// SPDX-License-Identifier: MIT

//! Session login/logout routes.
//!
//! MVP login: any non-empty username is accepted and resolves
//! deterministically to a stable user ID. Real credential checking is
//! an external collaborator's concern; everything downstream only sees
//! the user ID carried in the session token.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::middleware::auth::{create_jwt, SESSION_COOKIE};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", get(logout))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    username: Option<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user_id: String,
    pub token: String,
}

/// Log in with a username, issuing a session JWT as both a cookie and
/// a bearer token.
async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>)> {
    let username = body
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::Validation("username is required".to_string()))?;

    let user_id = username.to_lowercase();
    let token = create_jwt(&user_id, &state.config.jwt_signing_key).map_err(AppError::Internal)?;

    tracing::info!(user_id = %user_id, "User logged in");

    let cookie = Cookie::build((SESSION_COOKIE, token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            message: "Login successful".to_string(),
            user_id,
            token,
        }),
    ))
}

#[derive(Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Clear the session cookie.
async fn logout(jar: CookieJar) -> (CookieJar, Json<LogoutResponse>) {
    let mut cookie = Cookie::from(SESSION_COOKIE);
    cookie.set_path("/");

    (
        jar.remove(cookie),
        Json(LogoutResponse {
            message: "Logged out".to_string(),
        }),
    )
}
