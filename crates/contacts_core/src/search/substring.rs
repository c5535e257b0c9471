//! Case-insensitive substring matching over contact name and phone.
//!
//! # Invariants
//! - Matching lowercases both sides with Unicode rules, so Cyrillic names
//!   match regardless of case.
//! - An empty query matches every record.
//! - Input order is preserved in the output.

use crate::model::record::Record;
use log::debug;

/// Normalized contact search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactQuery {
    needle: String,
}

impl ContactQuery {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns whether the name or the phone contains the query.
    pub fn matches(&self, record: &Record) -> bool {
        if record.name().value().to_lowercase().contains(&self.needle) {
            return true;
        }
        record
            .phone()
            .is_some_and(|phone| phone.value().to_lowercase().contains(&self.needle))
    }
}

/// Filters `records` down to those matching `query`.
pub fn search_records<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    query: &str,
) -> Vec<&'a Record> {
    let query = ContactQuery::new(query);
    let hits = records
        .into_iter()
        .filter(|record| query.matches(record))
        .collect::<Vec<_>>();
    debug!(
        "event=contact_search module=search status=ok empty_query={} hits={}",
        query.is_empty(),
        hits.len()
    );
    hits
}

#[cfg(test)]
mod tests {
    use super::{search_records, ContactQuery};
    use crate::model::field::{Name, Phone};
    use crate::model::record::Record;

    #[test]
    fn matches_cyrillic_case_insensitively() {
        let record = Record::new(Name::new("ОЛЕНА").unwrap(), None, None);
        assert!(ContactQuery::new("олена").matches(&record));
        assert!(ContactQuery::new("Лен").matches(&record));
    }

    #[test]
    fn phone_is_searched_only_when_present() {
        let with_phone = Record::new(
            Name::new("Petro").unwrap(),
            Some(Phone::new("0501234567").unwrap()),
            None,
        );
        let without_phone = Record::new(Name::new("Pavlo").unwrap(), None, None);

        let records = [with_phone, without_phone];
        let hits = search_records(records.iter(), "1234");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name().value(), "Petro");
    }
}
