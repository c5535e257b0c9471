//! In-memory contact directory with JSON file persistence.
//!
//! # Responsibility
//! - Own every `Record`, keyed by its name.
//! - Expose add/remove/lookup, substring search, and file save/load.
//!
//! # Invariants
//! - At most one record per name; adding an existing name replaces it.
//! - Iteration and search results follow ascending name order, which is
//!   stable across a save/load round trip.
//! - A failed load or save leaves the in-memory records untouched.

use crate::model::record::Record;
use crate::search::substring::search_records;
use crate::storage::{read_contacts, write_contacts, StorageError, TextEncoding};
use std::collections::BTreeMap;
use std::path::Path;

pub type DirectoryError = StorageError;
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Result of [`Directory::load_from_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file does not exist; the directory is now empty.
    Missing,
    Loaded {
        encoding: TextEncoding,
        contacts: usize,
    },
}

/// Address book: records keyed by contact name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: BTreeMap<String, Record>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a directory from `path`; a missing file yields an empty one.
    pub fn open(path: impl AsRef<Path>) -> DirectoryResult<Self> {
        let mut directory = Self::new();
        directory.load_from_file(path)?;
        Ok(directory)
    }

    /// Inserts `record` under its name, returning the record it replaced.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records
            .insert(record.name().value().to_string(), record)
    }

    pub fn remove_record(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in ascending name order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Case-insensitive substring search over name and phone.
    ///
    /// An empty query matches every record. Results are in name order.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        search_records(self.records.values(), query)
    }

    /// Writes the whole directory to `path`, replacing any existing file.
    ///
    /// # Errors
    /// - Returns `StorageError::Io` when the file cannot be written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> DirectoryResult<()> {
        write_contacts(path.as_ref(), self.records.values())
    }

    /// Replaces the directory contents with the records stored at `path`.
    ///
    /// # Errors
    /// - `Io` for unreadable files.
    /// - `Json`/`InvalidDocument` for UTF-8 files that are not valid documents.
    /// - `Decode` when neither UTF-8 nor any fallback encoding yields a
    ///   valid document.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> DirectoryResult<LoadOutcome> {
        match read_contacts(path.as_ref())? {
            None => {
                self.records.clear();
                Ok(LoadOutcome::Missing)
            }
            Some((encoding, records)) => {
                let contacts = records.len();
                self.records = records;
                Ok(LoadOutcome::Loaded { encoding, contacts })
            }
        }
    }
}
