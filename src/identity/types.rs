use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A registered account.
///
/// The phone number is unique across the directory and immutable after
/// registration. The password hash is an Argon2 PHC string and never leaves
/// the process; clients only ever see a [`UserProfile`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub registered_at: DateTime<Utc>,
}

impl User {
    /// Display name used for matching and for search results.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields accepted by `UserStore::insert`. The store assigns the id and the
/// registration timestamp.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub password_hash: String,
}

/// Client-visible projection of a [`User`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: Option<String>,
}

impl UserProfile {
    pub fn of(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone_number: user.phone_number.clone(),
            email: user.email.clone(),
        }
    }
}

/// The already-authenticated caller, threaded explicitly through the search
/// resolver. The resolver never authenticates; the service layer resolves a
/// bearer token to a user and hands the resolver this projection.
#[derive(Debug, Clone)]
pub struct Requester {
    pub id: u64,
    pub phone_number: String,
}

impl Requester {
    pub fn of(user: &User) -> Self {
        Self {
            id: user.id,
            phone_number: user.phone_number.clone(),
        }
    }
}

/// E.164: `+` followed by 1-15 digits, first digit non-zero.
pub fn validate_phone_number(field: &'static str, phone_number: &str) -> Result<(), ApiError> {
    let re = Regex::new(r"^\+[1-9]\d{1,14}$").unwrap();
    if re.is_match(phone_number) {
        Ok(())
    } else {
        Err(ApiError::Validation {
            field,
            message: "must be in E.164 format (e.g., +11234567890)".to_string(),
        })
    }
}

pub fn validate_email(email: &str) -> Result<(), ApiError> {
    let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    if re.is_match(email) {
        Ok(())
    } else {
        Err(ApiError::Validation {
            field: "email",
            message: "enter a valid email address".to_string(),
        })
    }
}

pub fn validate_non_empty(field: &'static str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::Validation {
            field,
            message: "must not be empty".to_string(),
        })
    } else {
        Ok(())
    }
}
