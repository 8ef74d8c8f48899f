//! Search parameters and table filtering.

use serde::{Deserialize, Serialize};

use crate::query::matcher::{AndMatcher, ContainsMatcher, Field, Matcher};
use crate::records::{Record, Table};

/// Optional search parameters as received in the query string.
///
/// Serializes back with the same names so the response can echo it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchQuery {
    #[serde(rename = "tc")]
    pub national_id: Option<String>,

    #[serde(rename = "ad")]
    pub given_name: Option<String>,

    #[serde(rename = "soyad")]
    pub family_name: Option<String>,

    #[serde(rename = "okulno")]
    pub school_no: Option<String>,

    #[serde(rename = "durum")]
    pub status: Option<String>,
}

impl SearchQuery {
    /// Build from raw query-string pairs. The first occurrence of a key wins;
    /// unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "tc" => &mut query.national_id,
                "ad" => &mut query.given_name,
                "soyad" => &mut query.family_name,
                "okulno" => &mut query.school_no,
                "durum" => &mut query.status,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }

    /// Active constraints in field order. Absent and empty parameters are skipped.
    pub fn constraints(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        [
            (Field::NationalId, &self.national_id),
            (Field::GivenName, &self.given_name),
            (Field::FamilyName, &self.family_name),
            (Field::SchoolNo, &self.school_no),
            (Field::Status, &self.status),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (field, v))
        })
    }

    /// Compile the parameters into one conjunctive matcher.
    pub fn matcher(&self) -> AndMatcher {
        AndMatcher::new(
            self.constraints()
                .map(|(field, needle)| {
                    Box::new(ContainsMatcher::new(field, needle)) as Box<dyn Matcher>
                })
                .collect(),
        )
    }

    /// Records satisfying every supplied parameter, in table order.
    pub fn filter<'t>(&self, table: &'t Table) -> Vec<&'t Record> {
        let matcher = self.matcher();
        if matcher.is_empty() {
            return table.iter().collect();
        }
        table.iter().filter(|r| matcher.matches(r)).collect()
    }
}
