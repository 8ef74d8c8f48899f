//! The table provider used by request handlers.

use std::sync::Arc;

use crate::config::DataConfig;
use crate::records::cache::{fingerprint, TableCache};
use crate::records::error::LoadError;
use crate::records::loader::{discover_sources, read_sources};
use crate::records::record::Table;

/// Loads the record table on demand, optionally reusing the last parse.
pub struct RecordSource {
    config: DataConfig,
    cache: Option<TableCache>,
}

impl RecordSource {
    pub fn new(config: DataConfig) -> Self {
        let cache = config.cache_enabled.then(TableCache::new);
        Self { config, cache }
    }

    /// Current table. Blocks on file I/O.
    pub fn load(&self) -> Result<Arc<Table>, LoadError> {
        let paths = discover_sources(&self.config)?;

        let Some(cache) = &self.cache else {
            return Ok(Arc::new(read_sources(&paths)?));
        };

        let fp = fingerprint(&paths)?;
        if let Some(table) = cache.get(&fp) {
            tracing::trace!(rows = table.len(), "Record table served from cache");
            return Ok(table);
        }

        let table = Arc::new(read_sources(&paths)?);
        tracing::debug!(
            files = paths.len(),
            rows = table.len(),
            "Record table reloaded"
        );
        cache.store(fp, Arc::clone(&table));
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn source(dir: &std::path::Path, cache_enabled: bool) -> RecordSource {
        RecordSource::new(DataConfig {
            directory: dir.to_string_lossy().into_owned(),
            cache_enabled,
            ..DataConfig::default()
        })
    }

    #[test]
    fn test_uncached_reads_fresh_each_time() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("okulno1.csv"), "1,111,A,AA,1,Mezun\n").unwrap();

        let source = source(dir.path(), false);
        let first = source.load().unwrap();
        let second = source.load().unwrap();
        assert_eq!(first, second);
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_cached_until_files_change() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("okulno1.csv"), "1,111,A,AA,1,Mezun\n").unwrap();

        let source = source(dir.path(), true);
        let first = source.load().unwrap();
        let second = source.load().unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        fs::write(dir.path().join("okulno2.csv"), "2,222,B,BB,2,Mezun\n").unwrap();
        let third = source.load().unwrap();
        assert_eq!(third.len(), 2);
        assert!(!Arc::ptr_eq(&first, &third));
    }

    #[test]
    fn test_removing_all_files_reports_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("okulno1.csv");
        fs::write(&path, "1,111,A,AA,1,Mezun\n").unwrap();

        let source = source(dir.path(), true);
        assert_eq!(source.load().unwrap().len(), 1);

        fs::remove_file(&path).unwrap();
        assert!(source.load().unwrap_err().is_no_data());
    }
}
