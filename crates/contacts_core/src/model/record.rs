//! Contact record model.
//!
//! # Responsibility
//! - Aggregate one mandatory `Name` with a map of optional fields.
//! - Provide optional-field management and birthday arithmetic.
//!
//! # Invariants
//! - At most one field per `FieldKind`.
//! - Editing a field re-runs that field's validation; failures leave the
//!   record unchanged.

use crate::model::field::{Birthday, Field, FieldKind, InvalidValue, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error returned by [`Record::edit_field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditFieldError {
    /// The record has no field with this label.
    MissingField(FieldKind),
    Invalid(InvalidValue),
}

impl Display for EditFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(kind) => write!(f, "record has no `{kind}` field"),
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditFieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingField(_) => None,
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<InvalidValue> for EditFieldError {
    fn from(value: InvalidValue) -> Self {
        Self::Invalid(value)
    }
}

/// One contact: a name plus optional typed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    fields: BTreeMap<FieldKind, Field>,
}

impl Record {
    /// Creates a record, filing `phone` and `birthday` under their fixed labels.
    pub fn new(name: Name, phone: Option<Phone>, birthday: Option<Birthday>) -> Self {
        let mut record = Self {
            name,
            fields: BTreeMap::new(),
        };
        if let Some(phone) = phone {
            record.add_field(phone.into());
        }
        if let Some(birthday) = birthday {
            record.add_field(birthday.into());
        }
        record
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> Option<&Phone> {
        match self.fields.get(&FieldKind::Phone) {
            Some(Field::Phone(phone)) => Some(phone),
            _ => None,
        }
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        match self.fields.get(&FieldKind::Birthday) {
            Some(Field::Birthday(birthday)) => Some(birthday),
            _ => None,
        }
    }

    pub fn field(&self, kind: FieldKind) -> Option<&Field> {
        self.fields.get(&kind)
    }

    /// Optional fields in label order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    /// Adds or replaces the field under its own label.
    ///
    /// Returns the field previously stored under that label.
    pub fn add_field(&mut self, field: Field) -> Option<Field> {
        self.fields.insert(field.kind(), field)
    }

    pub fn remove_field(&mut self, kind: FieldKind) -> Option<Field> {
        self.fields.remove(&kind)
    }

    /// Re-validates `raw` and stores it in the existing `kind` field.
    ///
    /// # Errors
    /// - `MissingField` when no field is stored under `kind`.
    /// - `Invalid` when `raw` fails the field's validation.
    pub fn edit_field(&mut self, kind: FieldKind, raw: &str) -> Result<(), EditFieldError> {
        let field = self
            .fields
            .get_mut(&kind)
            .ok_or(EditFieldError::MissingField(kind))?;
        field.set(raw)?;
        Ok(())
    }

    /// Days from the local current date to the next birthday.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` to the next occurrence of the birthday's month/day.
    ///
    /// Returns `0` on the birthday itself and `None` when no birthday is set.
    /// A 29 February birthday is observed on 28 February in non-leap years.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday()?.value();
        let mut next = anniversary_in(birthday, today.year())?;
        if today > next {
            next = anniversary_in(birthday, today.year() + 1)?;
        }
        Some((next - today).num_days())
    }
}

fn anniversary_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day() - 1))
}

#[cfg(test)]
mod tests {
    use super::Record;
    use crate::model::field::{Birthday, Name};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn leap_day_birthday_falls_back_to_feb_28() {
        let record = Record::new(
            Name::new("Leap").unwrap(),
            None,
            Some(Birthday::new(date(2000, 2, 29))),
        );
        assert_eq!(record.days_to_birthday_from(date(2025, 2, 27)), Some(1));
        assert_eq!(record.days_to_birthday_from(date(2028, 2, 28)), Some(1));
    }

    #[test]
    fn rolls_into_next_year_only_after_the_day() {
        let record = Record::new(
            Name::new("Dec").unwrap(),
            None,
            Some(Birthday::new(date(1990, 12, 31))),
        );
        assert_eq!(record.days_to_birthday_from(date(2025, 12, 31)), Some(0));
        assert_eq!(record.days_to_birthday_from(date(2026, 1, 1)), Some(364));
    }
}
