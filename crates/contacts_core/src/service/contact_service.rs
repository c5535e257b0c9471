//! Contact use-case service.
//!
//! # Responsibility
//! - Bind a `Directory` to its backing file for one session.
//! - Turn raw caller input into validated records.
//! - Persist the directory after every addition.
//!
//! # Invariants
//! - Invalid input never reaches the directory.
//! - A failed save is reported, and the added record stays in memory.

use crate::model::field::{Birthday, InvalidValue, Name, Phone};
use crate::model::record::Record;
use crate::repo::directory::{Directory, LoadOutcome};
use crate::storage::StorageError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// File name used when the caller does not pick one.
pub const DEFAULT_CONTACTS_FILE: &str = "my_contacts.json";

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for contact use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Caller input failed field validation.
    Invalid(InvalidValue),
    Storage(StorageError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<InvalidValue> for ServiceError {
    fn from(value: InvalidValue) -> Self {
        Self::Invalid(value)
    }
}

impl From<StorageError> for ServiceError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Raw input for a new contact, as collected by an interactive caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    /// Blank input means no phone.
    pub phone: Option<String>,
    /// `YYYY-MM-DD`; blank input means no birthday.
    pub birthday: Option<String>,
}

impl NewContact {
    /// Validates every field and builds the record.
    ///
    /// # Errors
    /// - Returns the first `InvalidValue` in name, phone, birthday order.
    pub fn into_record(self) -> Result<Record, InvalidValue> {
        let name = Name::new(self.name)?;
        let phone = non_blank(self.phone).map(Phone::new).transpose()?;
        let birthday = non_blank(self.birthday)
            .map(|raw| Birthday::parse(&raw))
            .transpose()?;
        Ok(Record::new(name, phone, birthday))
    }
}

/// Use-case wrapper over a file-backed directory.
pub struct ContactService {
    path: PathBuf,
    directory: Directory,
}

impl ContactService {
    /// Loads the directory stored at `path`.
    ///
    /// A missing file starts an empty directory.
    pub fn open(path: impl Into<PathBuf>) -> ServiceResult<Self> {
        let path = path.into();
        let mut directory = Directory::new();
        match directory.load_from_file(&path)? {
            LoadOutcome::Missing => {
                info!("event=service_open module=service status=ok contacts=0 missing=true");
            }
            LoadOutcome::Loaded { encoding, contacts } => {
                info!(
                    "event=service_open module=service status=ok contacts={} encoding={}",
                    contacts, encoding
                );
            }
        }
        Ok(Self { path, directory })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Builds a record from raw input, adds it, and saves the directory.
    pub fn add_contact(&mut self, contact: NewContact) -> ServiceResult<()> {
        let record = contact.into_record()?;
        self.add_record(record)
    }

    /// Adds a validated record and saves the directory.
    ///
    /// # Errors
    /// - Returns `ServiceError::Storage` when the save fails; the record is
    ///   kept in memory regardless.
    pub fn add_record(&mut self, record: Record) -> ServiceResult<()> {
        let replaced = self.directory.add_record(record).is_some();

        if let Err(err) = self.directory.save_to_file(&self.path) {
            warn!(
                "event=contact_add module=service status=error replaced={} error_code=save_failed",
                replaced
            );
            return Err(err.into());
        }
        info!(
            "event=contact_add module=service status=ok replaced={} contacts={}",
            replaced,
            self.directory.len()
        );
        Ok(())
    }

    pub fn search(&self, query: &str) -> Vec<&Record> {
        self.directory.search(query)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
