//! Contact search entry points.
//!
//! # Responsibility
//! - Match records against free-text queries.
//! - Keep matching rules inside core so every caller gets the same results.

pub mod substring;
