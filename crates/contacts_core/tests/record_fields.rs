use chrono::{Datelike, Duration, NaiveDate};
use contacts_core::{Birthday, EditFieldError, Field, FieldKind, InvalidValue, Name, Phone, Record};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn olena() -> Record {
    Record::new(
        Name::new("Олена").unwrap(),
        Some(Phone::new("0991234567").unwrap()),
        Some(Birthday::new(date(2000, 5, 10))),
    )
}

#[test]
fn new_files_optional_fields_under_fixed_labels() {
    let record = olena();
    assert_eq!(
        record.field(FieldKind::Phone),
        Some(&Field::Phone(Phone::new("0991234567").unwrap()))
    );
    assert_eq!(record.birthday().unwrap().value(), date(2000, 5, 10));

    let bare = Record::new(Name::new("Bare").unwrap(), None, None);
    assert_eq!(bare.fields().count(), 0);
    assert_eq!(bare.days_to_birthday(), None);
}

#[test]
fn add_and_remove_field() {
    let mut record = Record::new(Name::new("Ostap").unwrap(), None, None);

    assert!(record.add_field(Phone::new("111").unwrap().into()).is_none());
    let previous = record.add_field(Phone::new("222").unwrap().into()).unwrap();
    assert_eq!(previous.display_value(), "111");

    let removed = record.remove_field(FieldKind::Phone).unwrap();
    assert_eq!(removed.display_value(), "222");
    assert!(record.phone().is_none());
    assert!(record.remove_field(FieldKind::Phone).is_none());
}

#[test]
fn edit_field_revalidates() {
    let mut record = olena();

    record.edit_field(FieldKind::Phone, "0670000000").unwrap();
    assert_eq!(record.phone().unwrap().value(), "0670000000");

    let err = record.edit_field(FieldKind::Phone, "067-000").unwrap_err();
    assert!(matches!(err, EditFieldError::Invalid(InvalidValue::NonDigitPhone(_))));
    assert_eq!(record.phone().unwrap().value(), "0670000000");

    record.edit_field(FieldKind::Birthday, "2001-01-02").unwrap();
    assert_eq!(record.birthday().unwrap().value(), date(2001, 1, 2));
    assert!(record.edit_field(FieldKind::Birthday, "2001-13-01").is_err());
    assert_eq!(record.birthday().unwrap().value(), date(2001, 1, 2));
}

#[test]
fn edit_missing_field_is_reported() {
    let mut record = Record::new(Name::new("Nobody").unwrap(), None, None);
    let err = record.edit_field(FieldKind::Birthday, "2000-01-01").unwrap_err();
    assert_eq!(err, EditFieldError::MissingField(FieldKind::Birthday));
}

#[test]
fn days_to_birthday_is_zero_on_the_day() {
    let record = olena();
    assert_eq!(record.days_to_birthday_from(date(2026, 5, 10)), Some(0));
}

#[test]
fn days_to_birthday_counts_forward_within_the_year() {
    let record = olena();
    assert_eq!(record.days_to_birthday_from(date(2026, 5, 1)), Some(9));
    assert_eq!(record.days_to_birthday_from(date(2026, 1, 1)), Some(129));
}

#[test]
fn days_to_birthday_rolls_over_after_the_day() {
    let record = olena();
    // 2026-05-11 -> 2027-05-10, no 29 February in between.
    assert_eq!(record.days_to_birthday_from(date(2026, 5, 11)), Some(364));
    // 2027-05-11 -> 2028-05-10 spans 2028-02-29.
    assert_eq!(record.days_to_birthday_from(date(2027, 5, 11)), Some(365));
}

#[test]
fn days_to_birthday_uses_local_today() {
    let today = chrono::Local::now().date_naive();
    let tomorrow = today + Duration::days(1);
    let record = Record::new(
        Name::new("Tomorrow").unwrap(),
        None,
        Some(Birthday::new(date(2000, tomorrow.month(), tomorrow.day()))),
    );

    let days = record.days_to_birthday().unwrap();
    // Tolerates the clock crossing midnight between the two reads.
    assert!(days == 1 || days == 0, "days={days}");
}
