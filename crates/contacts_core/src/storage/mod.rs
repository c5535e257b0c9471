//! JSON file persistence for the contact directory.
//!
//! # Responsibility
//! - Convert records to and from the `{"contacts": {...}}` document.
//! - Read files with a UTF-8 first, fallback-encoding second policy.
//! - Write whole documents with scoped, flushed file handles.
//!
//! # Invariants
//! - Loaded records pass the same validation as freshly built ones.
//! - Storage failures surface as `StorageError`; only a missing file is
//!   reported as a non-error outcome.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod codec;
pub mod encoding;
mod file;

pub use encoding::TextEncoding;
pub use file::{read_contacts, write_contacts};

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    /// No encoding in the chain produced a parseable document.
    Decode {
        path: PathBuf,
        tried: Vec<TextEncoding>,
    },
    /// Well-formed JSON that breaks a record invariant.
    InvalidDocument(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "i/o error on `{}`: {source}", path.display()),
            Self::Json(err) => write!(f, "invalid contacts json: {err}"),
            Self::Decode { path, tried } => {
                let labels = tried
                    .iter()
                    .map(|encoding| encoding.label())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "cannot decode `{}` with any supported encoding (tried {labels})",
                    path.display()
                )
            }
            Self::InvalidDocument(message) => write!(f, "invalid contacts document: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Decode { .. } => None,
            Self::InvalidDocument(_) => None,
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
