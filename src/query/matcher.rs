//! Record matching logic.
//!
//! # Responsibilities
//! - Match one record field by substring containment
//! - Numeric-like fields (identifier, school number) compare case-sensitively
//! - Name and status fields compare case-insensitively
//! - Combine conditions with AND semantics
//!
//! # Design Decisions
//! - Query text is literal; no pattern syntax
//! - A missing field never matches
//! - Empty condition set = always matches

use crate::records::Record;

/// Trait for matching records against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the record satisfies this condition.
    fn matches(&self, record: &Record) -> bool;
}

/// Searchable record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    NationalId,
    GivenName,
    FamilyName,
    SchoolNo,
    Status,
}

impl Field {
    pub fn value(self, record: &Record) -> Option<&str> {
        let value = match self {
            Field::NationalId => &record.national_id,
            Field::GivenName => &record.given_name,
            Field::FamilyName => &record.family_name,
            Field::SchoolNo => &record.school_no,
            Field::Status => &record.status,
        };
        value.as_deref()
    }

    /// Identifiers hold digits; exact substring is enough.
    pub fn is_case_sensitive(self) -> bool {
        matches!(self, Field::NationalId | Field::SchoolNo)
    }
}

/// Matches when a field contains the needle.
#[derive(Debug, Clone)]
pub struct ContainsMatcher {
    field: Field,
    needle: String,
}

impl ContainsMatcher {
    /// Create a new containment matcher.
    /// For case-insensitive fields the needle is normalized to lowercase.
    pub fn new(field: Field, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        let needle = if field.is_case_sensitive() {
            needle
        } else {
            needle.to_lowercase()
        };
        Self { field, needle }
    }
}

impl Matcher for ContainsMatcher {
    fn matches(&self, record: &Record) -> bool {
        let Some(value) = self.field.value(record) else {
            return false;
        };
        if self.field.is_case_sensitive() {
            value.contains(self.needle.as_str())
        } else {
            value.to_lowercase().contains(self.needle.as_str())
        }
    }
}

/// Combines multiple matchers with AND semantics.
#[derive(Debug, Default)]
pub struct AndMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AndMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl Matcher for AndMatcher {
    fn matches(&self, record: &Record) -> bool {
        self.matchers.iter().all(|m| m.matches(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tc: &str, ad: &str, soyad: &str, okulno: &str, durum: &str) -> Record {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Record {
            sequence_no: Some("1".into()),
            national_id: opt(tc),
            given_name: opt(ad),
            family_name: opt(soyad),
            school_no: opt(okulno),
            status: opt(durum),
        }
    }

    #[test]
    fn test_name_matching_ignores_case() {
        let gazal = record("19007791262", "GAZAL", "YILMAZ", "776", "Mezun");

        assert!(ContainsMatcher::new(Field::GivenName, "gazal").matches(&gazal));
        assert!(ContainsMatcher::new(Field::GivenName, "Aza").matches(&gazal));
        assert!(ContainsMatcher::new(Field::Status, "MEZ").matches(&gazal));
        assert!(!ContainsMatcher::new(Field::FamilyName, "kaya").matches(&gazal));
    }

    #[test]
    fn test_identifier_matching_is_exact_substring() {
        let gazal = record("19007791262", "GAZAL", "YILMAZ", "776", "Mezun");

        assert!(ContainsMatcher::new(Field::NationalId, "190").matches(&gazal));
        assert!(ContainsMatcher::new(Field::NationalId, "7791").matches(&gazal));
        assert!(!ContainsMatcher::new(Field::NationalId, "1900x").matches(&gazal));
        assert!(ContainsMatcher::new(Field::SchoolNo, "77").matches(&gazal));

        let coded = record("AB12", "X", "Y", "A7", "Mezun");
        assert!(!ContainsMatcher::new(Field::NationalId, "ab").matches(&coded));
        assert!(!ContainsMatcher::new(Field::SchoolNo, "a7").matches(&coded));
    }

    #[test]
    fn test_missing_field_never_matches() {
        let partial = record("111", "ALI", "", "", "");
        assert!(!ContainsMatcher::new(Field::FamilyName, "a").matches(&partial));
        assert!(!ContainsMatcher::new(Field::SchoolNo, "1").matches(&partial));
    }

    #[test]
    fn test_literal_needle() {
        let dotted = record("111", "A.B", "C", "1", "Mezun");
        assert!(ContainsMatcher::new(Field::GivenName, "a.b").matches(&dotted));
        assert!(!ContainsMatcher::new(Field::GivenName, "a.*").matches(&dotted));
    }

    #[test]
    fn test_unicode_case_folding() {
        let turkish = record("111", "ÇAĞRI", "ÖZTÜRK", "1", "Kayıtlı");
        assert!(ContainsMatcher::new(Field::GivenName, "çağ").matches(&turkish));
        assert!(ContainsMatcher::new(Field::FamilyName, "öztürk").matches(&turkish));
        assert!(ContainsMatcher::new(Field::Status, "KAYı").matches(&turkish));
    }

    #[test]
    fn test_and_matcher() {
        let gazal = record("111", "GAZAL", "YILMAZ", "776", "Mezun");
        let both: Vec<Box<dyn Matcher>> = vec![
            Box::new(ContainsMatcher::new(Field::GivenName, "gaz")),
            Box::new(ContainsMatcher::new(Field::Status, "mezun")),
        ];
        assert!(AndMatcher::new(both).matches(&gazal));

        let conflicting: Vec<Box<dyn Matcher>> = vec![
            Box::new(ContainsMatcher::new(Field::GivenName, "gaz")),
            Box::new(ContainsMatcher::new(Field::Status, "kayıt")),
        ];
        assert!(!AndMatcher::new(conflicting).matches(&gazal));

        assert!(AndMatcher::default().matches(&gazal));
    }
}
