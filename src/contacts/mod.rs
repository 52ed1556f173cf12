//! Contacts Module
//!
//! Per-user contact books: each entry records "this user believes this phone
//! number belongs to this name".
//!
//! ## Responsibilities
//! - **Creation**: single and bulk insertion, validated against the shared
//!   E.164 rule and the per-owner uniqueness constraint.
//! - **Bulk semantics**: every insertion is individually atomic; an explicit
//!   `atomic` flag selects all-or-nothing over partial success.
//! - **Deletion**: owner-scoped; a contact is only ever removed by the user
//!   who created it.
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: The contact model and API DTOs.

pub mod handlers;
pub mod types;
