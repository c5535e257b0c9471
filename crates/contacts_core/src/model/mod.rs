//! Contact domain model.
//!
//! # Responsibility
//! - Define validated field types and the record that aggregates them.
//! - Keep validation rules in one place so every entry point shares them.
//!
//! # Invariants
//! - Field values are valid from construction onward.
//! - A record's name is its identity inside a `Directory`.

pub mod field;
pub mod record;
