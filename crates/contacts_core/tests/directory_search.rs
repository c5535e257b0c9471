use contacts_core::{search_records, Directory, Name, Phone, Record};

fn directory() -> Directory {
    let mut directory = Directory::new();
    for (name, phone) in [
        ("Олена Пчілка", Some("0991234567")),
        ("Ivan Franko", Some("0671112233")),
        ("Marko Vovchok", None),
    ] {
        directory.add_record(Record::new(
            Name::new(name).unwrap(),
            phone.map(|value| Phone::new(value).unwrap()),
            None,
        ));
    }
    directory
}

fn names(records: &[&Record]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.name().value().to_string())
        .collect()
}

#[test]
fn empty_query_returns_every_record_in_name_order() {
    let directory = directory();
    let hits = directory.search("");
    assert_eq!(hits.len(), directory.len());
    assert_eq!(
        names(&hits),
        directory.names().map(str::to_string).collect::<Vec<_>>()
    );
}

#[test]
fn name_substring_matches_case_insensitively() {
    let directory = directory();
    assert_eq!(names(&directory.search("FRANK")), vec!["Ivan Franko"]);
    assert_eq!(names(&directory.search("пЧІЛ")), vec!["Олена Пчілка"]);
}

#[test]
fn phone_substring_matches() {
    let directory = directory();
    assert_eq!(names(&directory.search("111")), vec!["Ivan Franko"]);
}

#[test]
fn query_matching_nothing_returns_empty() {
    let directory = directory();
    assert!(directory.search("Shevchenko").is_empty());
    assert!(directory.search("555").is_empty());
}

#[test]
fn query_is_not_trimmed() {
    let directory = directory();
    assert_eq!(names(&directory.search(" franko")), vec!["Ivan Franko"]);
    assert!(directory.search("franko ").is_empty());
}

#[test]
fn search_records_works_on_any_record_slice() {
    let records = vec![
        Record::new(Name::new("Bohdan").unwrap(), None, None),
        Record::new(Name::new("Bohdana").unwrap(), None, None),
    ];
    let hits = search_records(&records, "dana");
    assert_eq!(names(&hits), vec!["Bohdana"]);
}
