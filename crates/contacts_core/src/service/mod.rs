//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, directory updates and persistence for callers.
//! - Keep CLI code free of storage details.

pub mod contact_service;
