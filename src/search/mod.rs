//! Search Module
//!
//! The unified search resolver, the core of the service.
//!
//! ## Overview
//! A search merges two heterogeneous record sources — the registered-user
//! directory and every user's contact book — into a single ordered result
//! list. Matching is plain substring/prefix matching over the name fields;
//! this is deliberately not a full-text engine.
//!
//! ## Responsibilities
//! - **Scoring**: Annotating every candidate with its spam likelihood from a
//!   table precomputed once per search.
//! - **Precedence**: A phone number that belongs to a registered user never
//!   surfaces as a contact-derived result in the same response.
//! - **Ranking**: Prefix matches before substring matches, deterministic
//!   tie-breaks, registered results ahead of contact-derived results.
//! - **Privacy**: Email disclosure only on the mutual-contact signal,
//!   evaluated against the explicit requester.
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`resolver`**: The name-path and phone-path resolution logic.
//! - **`types`**: The search result DTO.

pub mod handlers;
pub mod resolver;
pub mod types;
