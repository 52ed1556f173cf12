//! Spam Module
//!
//! Spam reports and the score calculator.
//!
//! ## Overview
//! Any registered user may report a phone number as spam, at most once per
//! number. Reports are immutable. The calculator in `score` turns report
//! counts into a normalized likelihood percentage consumed by the search
//! resolver.
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`score`**: The spam-likelihood calculation, single and batched.
//! - **`types`**: The report model and API DTOs.

pub mod handlers;
pub mod score;
pub mod types;
