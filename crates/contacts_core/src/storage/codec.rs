//! Contacts document codec.
//!
//! Document shape:
//!
//! ```json
//! {
//!     "contacts": {
//!         "Olena": {
//!             "name": { "value": "Olena" },
//!             "optional_fields": {
//!                 "Phone": { "value": "0991234567" },
//!                 "Birthday": { "value": "2000 05 10" }
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! # Invariants
//! - Dates are written as `YYYY MM DD`.
//! - Decoding rebuilds every field through its validating constructor.
//! - A `contacts` key must equal the nested record name.
//! - Reading also accepts the legacy shape, where labels are Ukrainian and
//!   values sit under `_Name__value`, `_Phone__value` or `_Birthday__value`.

use super::{StorageError, StorageResult};
use crate::model::field::{Field, FieldKind, InvalidValue, Name};
use crate::model::record::Record;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;
use std::collections::BTreeMap;

const JSON_INDENT: &[u8] = b"    ";

#[derive(Debug, Serialize, Deserialize)]
struct ContactsDocument {
    contacts: BTreeMap<String, RecordDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RecordDoc {
    name: ValueDoc,
    #[serde(default)]
    optional_fields: BTreeMap<FieldKind, ValueDoc>,
}

/// Field shape. Legacy files store the value under a per-kind key next to a
/// `_Field__value: null` entry, which is ignored.
#[derive(Debug, Serialize, Deserialize)]
struct ValueDoc {
    #[serde(
        alias = "_Name__value",
        alias = "_Phone__value",
        alias = "_Birthday__value"
    )]
    value: String,
}

impl From<&Record> for RecordDoc {
    fn from(record: &Record) -> Self {
        Self {
            name: ValueDoc {
                value: record.name().value().to_string(),
            },
            optional_fields: record
                .fields()
                .map(|field| {
                    (
                        field.kind(),
                        ValueDoc {
                            value: field.display_value(),
                        },
                    )
                })
                .collect(),
        }
    }
}

/// Serializes records into the pretty-printed contacts document.
///
/// Non-ASCII text is written as-is.
pub fn encode_document<'a>(
    records: impl IntoIterator<Item = &'a Record>,
) -> StorageResult<Vec<u8>> {
    let document = ContactsDocument {
        contacts: records
            .into_iter()
            .map(|record| (record.name().value().to_string(), RecordDoc::from(record)))
            .collect(),
    };

    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(JSON_INDENT));
    document.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Parses a contacts document into records keyed by name.
///
/// # Errors
/// - `Json` when the text is not a document of the expected shape.
/// - `InvalidDocument` when a stored value fails field validation or a key
///   does not match its record name.
pub fn decode_document(text: &str) -> StorageResult<BTreeMap<String, Record>> {
    let document: ContactsDocument = serde_json::from_str(text)?;
    let mut contacts = BTreeMap::new();

    for (key, doc) in document.contacts {
        let record = record_from_doc(&key, doc)?;
        if record.name().value() != key {
            return Err(StorageError::InvalidDocument(format!(
                "contact key `{key}` does not match record name `{}`",
                record.name()
            )));
        }
        contacts.insert(key, record);
    }

    Ok(contacts)
}

fn record_from_doc(key: &str, doc: RecordDoc) -> StorageResult<Record> {
    let invalid =
        |err: InvalidValue| StorageError::InvalidDocument(format!("contact `{key}`: {err}"));

    let name = Name::new(doc.name.value).map_err(invalid)?;
    let mut record = Record::new(name, None, None);
    for (kind, value) in doc.optional_fields {
        record.add_field(Field::parse(kind, &value.value).map_err(invalid)?);
    }
    Ok(record)
}
