//! Parsed table cache keyed on source file metadata.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use arc_swap::ArcSwapOption;

use crate::records::error::LoadError;
use crate::records::record::Table;

/// Identity of one source file at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStamp {
    pub path: PathBuf,
    pub modified: Option<SystemTime>,
    pub len: u64,
}

impl SourceStamp {
    pub fn of(path: &Path) -> Result<Self, LoadError> {
        let meta = fs::metadata(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}

/// Stamps of every source file, in load order.
pub type Fingerprint = Vec<SourceStamp>;

pub fn fingerprint(paths: &[PathBuf]) -> Result<Fingerprint, LoadError> {
    paths.iter().map(|p| SourceStamp::of(p)).collect()
}

struct CachedTable {
    fingerprint: Fingerprint,
    table: Arc<Table>,
}

/// Holds the last parsed table together with the fingerprint it was built from.
///
/// Readers never block; a reload replaces the whole entry.
#[derive(Default)]
pub struct TableCache {
    slot: ArcSwapOption<CachedTable>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached table, if it was built from exactly these files.
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<Arc<Table>> {
        let guard = self.slot.load();
        guard
            .as_ref()
            .filter(|cached| &cached.fingerprint == fingerprint)
            .map(|cached| Arc::clone(&cached.table))
    }

    pub fn store(&self, fingerprint: Fingerprint, table: Arc<Table>) {
        self.slot
            .store(Some(Arc::new(CachedTable { fingerprint, table })));
    }

    pub fn clear(&self) {
        self.slot.store(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::record::Record;

    fn stamp(path: &str, len: u64) -> SourceStamp {
        SourceStamp {
            path: PathBuf::from(path),
            modified: None,
            len,
        }
    }

    #[test]
    fn test_hit_and_miss() {
        let cache = TableCache::new();
        let fp = vec![stamp("okulno1.csv", 10)];
        assert!(cache.get(&fp).is_none());

        let table = Arc::new(Table::from(vec![Record::default()]));
        cache.store(fp.clone(), Arc::clone(&table));

        let hit = cache.get(&fp).unwrap();
        assert!(Arc::ptr_eq(&hit, &table));

        assert!(cache.get(&vec![stamp("okulno1.csv", 11)]).is_none());
        assert!(cache
            .get(&vec![stamp("okulno1.csv", 10), stamp("okulno2.csv", 1)])
            .is_none());

        cache.clear();
        assert!(cache.get(&fp).is_none());
    }

    #[test]
    fn test_fingerprint_of_missing_file() {
        let err = fingerprint(&[PathBuf::from("no/such/okulno.csv")]).unwrap_err();
        assert_eq!(err.kind(), "io");
    }
}
