//! Spam Detector Backend Library
//!
//! This library crate defines the core modules of the lookup service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of six loosely coupled subsystems:
//!
//! - **`auth`**: Registration, login, and bearer-token resolution. Passwords
//!   are hashed with Argon2; tokens are opaque UUIDs held in a concurrent
//!   token store.
//! - **`identity`**: The registered-user model and the field validation rules
//!   (E.164 phone numbers, email format) shared by every write path.
//! - **`contacts`**: Per-user contact books, including single and bulk
//!   creation with per-record atomicity.
//! - **`spam`**: Spam reports and the score calculator that turns report
//!   counts into a normalized spam-likelihood percentage.
//! - **`search`**: The unified search resolver. Merges the user directory and
//!   all contact books into one ordered, deduplicated, privacy-filtered
//!   result list.
//! - **`storage`**: The state layer. Concurrent in-memory stores for users,
//!   contacts, and spam reports with atomic per-record writes.

pub mod auth;
pub mod contacts;
pub mod error;
pub mod identity;
pub mod search;
pub mod spam;
pub mod storage;
