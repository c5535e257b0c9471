//! Core domain logic for the contacts directory.
//! This crate is the single source of truth for field and record invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::field::{Birthday, Field, FieldKind, InvalidValue, Name, Phone};
pub use model::record::{EditFieldError, Record};
pub use repo::directory::{Directory, DirectoryError, DirectoryResult, LoadOutcome};
pub use search::substring::{search_records, ContactQuery};
pub use service::contact_service::{
    ContactService, NewContact, ServiceError, ServiceResult, DEFAULT_CONTACTS_FILE,
};
pub use storage::{StorageError, StorageResult, TextEncoding};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
