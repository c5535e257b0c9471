//! Validated contact fields.
//!
//! # Responsibility
//! - Define the scalar values a contact is made of (`Name`, `Phone`, `Birthday`).
//! - Enforce each field's invariant at construction and at reassignment.
//!
//! # Invariants
//! - A field instance always holds a valid value.
//! - A failed `set` leaves the previous value in place.
//! - Optional fields are labeled by the closed `FieldKind` set.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum name length, counted in characters.
pub const MIN_NAME_CHARS: usize = 2;
/// Date pattern used by the persisted document.
pub const STORAGE_DATE_FORMAT: &str = "%Y %m %d";
/// Date pattern accepted from interactive input.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]*$").expect("valid phone regex"));

/// Field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidValue {
    /// Name has fewer than [`MIN_NAME_CHARS`] characters.
    NameTooShort { length: usize },
    /// Phone contains a character outside `0-9`.
    NonDigitPhone(String),
    /// Birthday input is not a calendar date.
    NotADate(String),
}

impl Display for InvalidValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameTooShort { length } => write!(
                f,
                "name too short: {length} characters, expected at least {MIN_NAME_CHARS}"
            ),
            Self::NonDigitPhone(value) => {
                write!(f, "non-digit phone `{value}`: only digits 0-9 are allowed")
            }
            Self::NotADate(value) => write!(
                f,
                "not a date: `{value}` (expected YYYY-MM-DD or YYYY MM DD)"
            ),
        }
    }
}

impl Error for InvalidValue {}

/// Contact display name and directory key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidValue> {
        let value = value.into();
        validate_name(&value)?;
        Ok(Self(value))
    }

    /// Replaces the value when `value` is a valid name.
    pub fn set(&mut self, value: impl Into<String>) -> Result<(), InvalidValue> {
        *self = Self::new(value)?;
        Ok(())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Phone number made of ASCII digits. Empty is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidValue> {
        let value = value.into();
        if !PHONE_RE.is_match(&value) {
            return Err(InvalidValue::NonDigitPhone(value));
        }
        Ok(Self(value))
    }

    /// Replaces the value when `value` contains digits only.
    pub fn set(&mut self, value: impl Into<String>) -> Result<(), InvalidValue> {
        *self = Self::new(value)?;
        Ok(())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Birth date of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Wraps an already-typed calendar date.
    pub fn new(value: NaiveDate) -> Self {
        Self(value)
    }

    /// Parses `YYYY-MM-DD` or `YYYY MM DD`.
    ///
    /// # Errors
    /// - Returns `InvalidValue::NotADate` for any other shape or for an
    ///   impossible date such as `2023-02-30`.
    pub fn parse(raw: &str) -> Result<Self, InvalidValue> {
        let trimmed = raw.trim();
        [INPUT_DATE_FORMAT, STORAGE_DATE_FORMAT]
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
            .map(Self)
            .ok_or_else(|| InvalidValue::NotADate(raw.to_string()))
    }

    /// Replaces the value with the date parsed from `raw`.
    pub fn set(&mut self, raw: &str) -> Result<(), InvalidValue> {
        *self = Self::parse(raw)?;
        Ok(())
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }

    /// Formats the date in the persisted `YYYY MM DD` shape.
    pub fn to_storage_string(&self) -> String {
        self.0.format(STORAGE_DATE_FORMAT).to_string()
    }
}

/// Label of an optional record field.
///
/// Serialized labels are `Phone` and `Birthday`; the Ukrainian labels written
/// by older files are still accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    #[serde(alias = "Телефон")]
    Phone,
    #[serde(alias = "День народження")]
    Birthday,
}

impl FieldKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Phone => "Phone",
            Self::Birthday => "Birthday",
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Optional field value owned by a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Phone(Phone),
    Birthday(Birthday),
}

impl Field {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Phone(_) => FieldKind::Phone,
            Self::Birthday(_) => FieldKind::Birthday,
        }
    }

    /// Builds a field of `kind` from raw text, running that kind's validation.
    pub fn parse(kind: FieldKind, raw: &str) -> Result<Self, InvalidValue> {
        match kind {
            FieldKind::Phone => Phone::new(raw).map(Self::Phone),
            FieldKind::Birthday => Birthday::parse(raw).map(Self::Birthday),
        }
    }

    /// Re-validates `raw` and replaces the value in place.
    pub fn set(&mut self, raw: &str) -> Result<(), InvalidValue> {
        match self {
            Self::Phone(phone) => phone.set(raw),
            Self::Birthday(birthday) => birthday.set(raw),
        }
    }

    /// Text form of the value; dates use the storage pattern.
    pub fn display_value(&self) -> String {
        match self {
            Self::Phone(phone) => phone.value().to_string(),
            Self::Birthday(birthday) => birthday.to_storage_string(),
        }
    }
}

impl From<Phone> for Field {
    fn from(value: Phone) -> Self {
        Self::Phone(value)
    }
}

impl From<Birthday> for Field {
    fn from(value: Birthday) -> Self {
        Self::Birthday(value)
    }
}

fn validate_name(value: &str) -> Result<(), InvalidValue> {
    let length = value.chars().count();
    if length < MIN_NAME_CHARS {
        return Err(InvalidValue::NameTooShort { length });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Birthday, Field, FieldKind, InvalidValue, Name, Phone};
    use chrono::NaiveDate;

    #[test]
    fn name_counts_characters_not_bytes() {
        assert!(Name::new("Ол").is_ok());
        assert_eq!(
            Name::new("О").unwrap_err(),
            InvalidValue::NameTooShort { length: 1 }
        );
    }

    #[test]
    fn failed_set_keeps_previous_value() {
        let mut phone = Phone::new("0501112233").unwrap();
        assert!(phone.set("050-111").is_err());
        assert_eq!(phone.value(), "0501112233");

        let mut name = Name::new("Taras").unwrap();
        assert!(name.set("T").is_err());
        assert_eq!(name.value(), "Taras");
    }

    #[test]
    fn phone_rejects_unicode_digits() {
        let err = Phone::new("٣٣٣").unwrap_err();
        assert!(err.to_string().contains("non-digit phone"));
    }

    #[test]
    fn birthday_parses_input_and_storage_shapes() {
        let expected = NaiveDate::from_ymd_opt(2000, 5, 10).unwrap();
        assert_eq!(Birthday::parse("2000-05-10").unwrap().value(), expected);
        assert_eq!(Birthday::parse("2000 05 10").unwrap().value(), expected);
        assert_eq!(
            Birthday::new(expected).to_storage_string(),
            "2000 05 10".to_string()
        );
    }

    #[test]
    fn birthday_rejects_impossible_dates() {
        for raw in ["2023-02-30", "yesterday", "", "10.05.2000"] {
            let err = Birthday::parse(raw).unwrap_err();
            assert!(matches!(err, InvalidValue::NotADate(_)), "raw={raw}");
        }
    }

    #[test]
    fn field_parse_dispatches_on_kind() {
        let field = Field::parse(FieldKind::Birthday, "1999-12-31").unwrap();
        assert_eq!(field.kind(), FieldKind::Birthday);
        assert_eq!(field.display_value(), "1999 12 31");

        assert!(Field::parse(FieldKind::Phone, "1999-12-31").is_err());
    }
}
