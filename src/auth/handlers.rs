use axum::http::{HeaderMap, StatusCode, header};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::password::{hash_password, verify_password};
use super::tokens::TokenStore;
use crate::error::ApiError;
use crate::identity::types::{
    NewUser, User, UserProfile, validate_email, validate_non_empty, validate_phone_number,
};
use crate::storage::memory::UserStore;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub phone_number: String,
    pub password: String,
}

/// Returned by both registration and login: a bearer token plus the profile
/// the token resolves to.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

pub async fn handle_register(
    Extension(users): Extension<Arc<UserStore>>,
    Extension(tokens): Extension<Arc<TokenStore>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    validate_non_empty("first_name", &req.first_name)?;
    validate_non_empty("last_name", &req.last_name)?;
    validate_non_empty("password", &req.password)?;
    validate_phone_number("phone_number", &req.phone_number)?;

    let email = req.email.filter(|e| !e.trim().is_empty());
    if let Some(email) = &email {
        validate_email(email)?;
    }

    let password_hash = hash_password(&req.password)?;
    let user = users.insert(NewUser {
        first_name: req.first_name,
        last_name: req.last_name,
        phone_number: req.phone_number,
        email,
        password_hash,
    })?;

    tracing::info!("Registered user {} ({})", user.id, user.phone_number);

    let token = tokens.issue(user.id);
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserProfile::of(&user),
        }),
    ))
}

pub async fn handle_login(
    Extension(users): Extension<Arc<UserStore>>,
    Extension(tokens): Extension<Arc<TokenStore>>,
    Json(req): Json<LoginRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    // Unknown number and wrong password are indistinguishable to the caller.
    let user = users
        .find_by_phone(req.phone_number.trim())
        .ok_or(ApiError::InvalidCredentials)?;

    if !verify_password(&req.password, &user.password_hash)? {
        tracing::debug!("Failed login attempt for user {}", user.id);
        return Err(ApiError::InvalidCredentials);
    }

    let token = tokens.issue(user.id);
    tracing::debug!("User {} logged in", user.id);

    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            token,
            user: UserProfile::of(&user),
        }),
    ))
}

/// Resolve the `Authorization: Bearer <token>` header to a registered user.
///
/// Protected handlers call this first and thread the result into the core as
/// an explicit requester.
pub fn authenticate(
    headers: &HeaderMap,
    tokens: &TokenStore,
    users: &UserStore,
) -> Result<User, ApiError> {
    let header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    let token = header.strip_prefix("Bearer ").ok_or(ApiError::Unauthorized)?;
    let user_id = tokens.resolve(token).ok_or(ApiError::Unauthorized)?;

    users.get(user_id).ok_or(ApiError::Unauthorized)
}
