//! Identity Module
//!
//! The registered-user model and the field validation rules shared by every
//! write path (registration, contact creation, spam reporting).
//!
//! ## Overview
//! An identity is an account keyed by a globally unique E.164 phone number.
//! The phone number is immutable after registration and identities are never
//! deleted. Validation lives here so that the same E.164 and email rules
//! apply wherever a phone number or email enters the system.

pub mod types;

#[cfg(test)]
mod tests;
