//! Storage Module
//!
//! The state layer: concurrent in-memory stores for users, contacts, and
//! spam reports.
//!
//! ## Overview
//! Each store wraps sharded concurrent maps plus the secondary indexes that
//! enforce the uniqueness invariants (unique registration phone, unique
//! (owner, phone) contact, unique (reporter, phone) report). Writes are
//! atomic per record: an insert either fully succeeds or leaves the store
//! untouched. Reads are best-effort snapshots; searches never mutate state,
//! so concurrent searches need no coordination beyond the maps' own locking.

pub mod memory;

#[cfg(test)]
mod tests;
