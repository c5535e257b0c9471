//! File read/write for contacts documents.
//!
//! # Invariants
//! - Writes replace the whole file; there is no append or partial update.
//! - The write handle is flushed before success is reported.
//! - A missing file reads as `None`, never as an error.

use super::codec::{decode_document, encode_document};
use super::encoding::{TextEncoding, FALLBACK_ENCODINGS};
use super::{StorageError, StorageResult};
use crate::model::record::Record;
use log::{error, info, warn};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use std::time::Instant;

/// Reads and decodes a contacts file.
///
/// Returns `Ok(None)` when `path` does not exist, otherwise the encoding that
/// produced the document together with its records.
///
/// # Errors
/// - `Io` for read failures other than a missing file.
/// - `Json`/`InvalidDocument` when valid UTF-8 text is not a valid document.
/// - `Decode` when UTF-8 fails and no fallback encoding yields a document.
pub fn read_contacts(
    path: &Path,
) -> StorageResult<Option<(TextEncoding, BTreeMap<String, Record>)>> {
    let started_at = Instant::now();
    info!(
        "event=directory_load module=storage status=start path={}",
        path.display()
    );

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                "event=directory_load module=storage status=ok path={} duration_ms={} missing=true",
                path.display(),
                started_at.elapsed().as_millis()
            );
            return Ok(None);
        }
        Err(err) => {
            error!(
                "event=directory_load module=storage status=error path={} duration_ms={} error_code=read_failed error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    match parse_bytes(path, &bytes) {
        Ok((encoding, contacts)) => {
            info!(
                "event=directory_load module=storage status=ok path={} duration_ms={} encoding={} contacts={}",
                path.display(),
                started_at.elapsed().as_millis(),
                encoding,
                contacts.len()
            );
            Ok(Some((encoding, contacts)))
        }
        Err(err) => {
            error!(
                "event=directory_load module=storage status=error path={} duration_ms={} error_code=parse_failed error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Serializes `records` and overwrites `path` with the document.
///
/// # Errors
/// - `Io` when the file cannot be created, written or flushed.
pub fn write_contacts<'a>(
    path: &Path,
    records: impl IntoIterator<Item = &'a Record>,
) -> StorageResult<()> {
    let started_at = Instant::now();
    let bytes = encode_document(records)?;

    match write_bytes(path, &bytes) {
        Ok(()) => {
            info!(
                "event=directory_save module=storage status=ok path={} duration_ms={} bytes={}",
                path.display(),
                started_at.elapsed().as_millis(),
                bytes.len()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=directory_save module=storage status=error path={} duration_ms={} error_code=write_failed error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            Err(StorageError::Io {
                path: path.to_path_buf(),
                source: err,
            })
        }
    }
}

fn write_bytes(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(bytes)?;
    writer.flush()
}

fn parse_bytes(
    path: &Path,
    bytes: &[u8],
) -> StorageResult<(TextEncoding, BTreeMap<String, Record>)> {
    if let Some(text) = TextEncoding::Utf8.decode(bytes) {
        return Ok((TextEncoding::Utf8, decode_document(&text)?));
    }

    warn!(
        "event=decode_fallback module=storage status=start path={} primary={}",
        path.display(),
        TextEncoding::Utf8
    );

    let mut tried = vec![TextEncoding::Utf8];
    for encoding in FALLBACK_ENCODINGS {
        tried.push(encoding);
        let Some(text) = encoding.decode(bytes) else {
            warn!(
                "event=decode_fallback module=storage status=error encoding={} error_code=decode_failed",
                encoding
            );
            continue;
        };
        match decode_document(&text) {
            Ok(contacts) => {
                info!(
                    "event=decode_fallback module=storage status=ok encoding={}",
                    encoding
                );
                return Ok((encoding, contacts));
            }
            Err(err) => {
                warn!(
                    "event=decode_fallback module=storage status=error encoding={} error_code=parse_failed error={}",
                    encoding, err
                );
            }
        }
    }

    Err(StorageError::Decode {
        path: path.to_path_buf(),
        tried,
    })
}
