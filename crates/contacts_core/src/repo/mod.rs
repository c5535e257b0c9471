//! Contact directory and its persistence entry points.
//!
//! # Responsibility
//! - Hold the canonical name -> record mapping for a session.
//! - Delegate file format details to `storage`.
//!
//! # Invariants
//! - Raw map mutation is never exposed; callers go through `Directory` APIs.

pub mod directory;
