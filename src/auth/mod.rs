//! Auth Module
//!
//! Registration, login, and bearer-token resolution.
//!
//! ## Overview
//! This module is the only place that touches credentials. Passwords are
//! hashed with Argon2 and never stored or logged in the clear. Successful
//! registration or login issues an opaque UUID bearer token; protected
//! handlers resolve the `Authorization` header back to a registered user and
//! pass an explicit requester into the core.
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`password`**: Argon2 hashing and verification.
//! - **`tokens`**: The concurrent token store with TTL expiry.

pub mod handlers;
pub mod password;
pub mod tokens;
