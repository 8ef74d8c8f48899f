//! Record and table types.

use csv::StringRecord;
use serde::Serialize;

/// Number of positional columns in a record file.
pub const COLUMN_COUNT: usize = 6;

/// One student identity/status row.
///
/// Every field is text. A column that is absent from the row or empty in the
/// file is `None` and serializes as JSON `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(rename = "sira_no")]
    pub sequence_no: Option<String>,

    #[serde(rename = "tc_kimlik")]
    pub national_id: Option<String>,

    #[serde(rename = "ad")]
    pub given_name: Option<String>,

    #[serde(rename = "soyad")]
    pub family_name: Option<String>,

    #[serde(rename = "okul_no")]
    pub school_no: Option<String>,

    #[serde(rename = "durum")]
    pub status: Option<String>,
}

impl Record {
    /// Build a record from a raw CSV row by column position.
    ///
    /// Short rows leave the trailing fields missing; columns past the sixth
    /// are dropped.
    pub fn from_row(row: &StringRecord) -> Self {
        let column = |idx: usize| {
            row.get(idx)
                .filter(|value| !value.is_empty())
                .map(str::to_owned)
        };

        Self {
            sequence_no: column(0),
            national_id: column(1),
            given_name: column(2),
            family_name: column(3),
            school_no: column(4),
            status: column(5),
        }
    }
}

/// Ordered concatenation of every source row for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append rows, keeping their order after the existing ones.
    pub fn extend<I: IntoIterator<Item = Record>>(&mut self, rows: I) {
        self.records.extend(rows);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl From<Vec<Record>> for Table {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
