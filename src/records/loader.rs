//! Record file discovery and parsing.
//!
//! # Responsibilities
//! - Find every `<prefix>*.<extension>` file in the data directory
//! - Parse each one as headerless, six-column CSV
//! - Concatenate rows in file name order
//!
//! # Design Decisions
//! - Rows are never validated beyond column position
//! - Any unreadable file fails the whole load; no partial tables

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use glob::{glob, Pattern};

use crate::config::DataConfig;
use crate::records::error::LoadError;
use crate::records::record::{Record, Table, COLUMN_COUNT};

/// Glob pattern matching the configured record files.
pub fn source_pattern(config: &DataConfig) -> String {
    format!(
        "{}/{}*.{}",
        Pattern::escape(&config.directory),
        Pattern::escape(&config.file_prefix),
        Pattern::escape(&config.file_extension),
    )
}

/// List matching record files, sorted by path.
///
/// Returns [`LoadError::NoSourceFiles`] when nothing matches.
pub fn discover_sources(config: &DataConfig) -> Result<Vec<PathBuf>, LoadError> {
    let pattern = source_pattern(config);
    let mut paths = Vec::new();

    for entry in glob(&pattern)? {
        let path = entry.map_err(|e| LoadError::Io {
            path: e.path().to_path_buf(),
            source: e.into(),
        })?;
        if path.is_file() {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(LoadError::NoSourceFiles { pattern });
    }

    paths.sort();
    Ok(paths)
}

/// Parse one record file, keeping row order.
pub fn read_source(path: &Path) -> Result<Vec<Record>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    let mut irregular = 0usize;
    for result in reader.records() {
        let row = result.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if row.len() != COLUMN_COUNT {
            irregular += 1;
        }
        rows.push(Record::from_row(&row));
    }

    tracing::trace!(
        path = %path.display(),
        rows = rows.len(),
        irregular,
        "Record file parsed"
    );
    Ok(rows)
}

/// Parse the given files in order into one table.
pub fn read_sources(paths: &[PathBuf]) -> Result<Table, LoadError> {
    let mut table = Table::new();
    for path in paths {
        table.extend(read_source(path)?);
    }
    Ok(table)
}

/// Discover and parse every record file.
pub fn load_table(config: &DataConfig) -> Result<Table, LoadError> {
    let paths = discover_sources(config)?;
    let table = read_sources(&paths)?;

    tracing::debug!(
        files = paths.len(),
        rows = table.len(),
        "Record table loaded"
    );
    Ok(table)
}
