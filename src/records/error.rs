//! Record source error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while assembling the record table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Nothing in the data directory matches the file pattern.
    #[error("no record files match '{pattern}'")]
    NoSourceFiles { pattern: String },

    /// The configured directory or prefix does not form a valid pattern.
    #[error("invalid record file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A matched file could not be opened, listed or stat'ed.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A matched file is not valid CSV (bad quoting, invalid UTF-8).
    #[error("cannot decode {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl LoadError {
    /// True when the failure means "there is no data", as opposed to data
    /// that exists but could not be read.
    pub fn is_no_data(&self) -> bool {
        matches!(self, LoadError::NoSourceFiles { .. })
    }

    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::NoSourceFiles { .. } => "no_source_files",
            LoadError::Pattern(_) => "pattern",
            LoadError::Io { .. } => "io",
            LoadError::Csv { .. } => "csv",
        }
    }
}
