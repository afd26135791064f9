//! Per-tree manifest cache.
//!
//! Every check under "Chart.yaml is present" looks at the parsed manifest.
//! The cache makes sure the file is read and parsed once per tree.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::analyzer::chartlint::parser::chart::{Chartfile, ManifestError, ManifestReader};

/// Cached result of reading one manifest.
pub type ManifestOutcome = Result<Rc<Chartfile>, Rc<ManifestError>>;

/// Manifest cache keyed by the Chart.yaml path.
///
/// Both successes and failures are kept. Entries are never invalidated, so
/// every check in one traversal sees the same record.
pub struct ManifestCache {
    reader: Box<dyn ManifestReader>,
    entries: RefCell<HashMap<PathBuf, ManifestOutcome>>,
}

impl ManifestCache {
    pub fn new(reader: Box<dyn ManifestReader>) -> Self {
        Self {
            reader,
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Return the manifest at `path`, reading it on first use.
    pub fn get(&self, path: &Path) -> ManifestOutcome {
        let cached = self.entries.borrow().get(path).cloned();
        if let Some(hit) = cached {
            log::trace!("Manifest cache hit for {}", path.display());
            return hit;
        }

        let outcome = self.reader.read(path).map(Rc::new).map_err(Rc::new);
        if let Err(e) = &outcome {
            log::debug!("Manifest unavailable: {}", e);
        }
        self.entries
            .borrow_mut()
            .insert(path.to_path_buf(), outcome.clone());
        outcome
    }

    /// Number of distinct manifests read so far.
    pub fn read_count(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl fmt::Debug for ManifestCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManifestCache")
            .field("entries", &self.entries.borrow().keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingReader {
        reads: Rc<Cell<usize>>,
        fail: bool,
    }

    impl ManifestReader for CountingReader {
        fn read(&self, _path: &Path) -> Result<Chartfile, ManifestError> {
            self.reads.set(self.reads.get() + 1);
            if self.fail {
                Err(ManifestError::Malformed {
                    message: "bad".to_string(),
                    line: None,
                })
            } else {
                Ok(Chartfile {
                    name: "cached".to_string(),
                    ..Chartfile::default()
                })
            }
        }
    }

    #[test]
    fn test_success_is_read_once() {
        let reads = Rc::new(Cell::new(0));
        let cache = ManifestCache::new(Box::new(CountingReader {
            reads: Rc::clone(&reads),
            fail: false,
        }));

        let path = Path::new("/charts/app/Chart.yaml");
        for _ in 0..5 {
            assert_eq!(cache.get(path).unwrap().name, "cached");
        }
        assert_eq!(reads.get(), 1);
        assert_eq!(cache.read_count(), 1);
    }

    #[test]
    fn test_failure_is_cached_too() {
        let reads = Rc::new(Cell::new(0));
        let cache = ManifestCache::new(Box::new(CountingReader {
            reads: Rc::clone(&reads),
            fail: true,
        }));

        let path = Path::new("/charts/app/Chart.yaml");
        assert!(cache.get(path).is_err());
        assert!(cache.get(path).is_err());
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn test_distinct_paths_are_read_separately() {
        let reads = Rc::new(Cell::new(0));
        let cache = ManifestCache::new(Box::new(CountingReader {
            reads: Rc::clone(&reads),
            fail: false,
        }));

        assert_eq!(cache.read_count(), 0);
        let _ = cache.get(Path::new("a/Chart.yaml"));
        let _ = cache.get(Path::new("b/Chart.yaml"));
        assert_eq!(reads.get(), 2);
        assert_eq!(cache.read_count(), 2);
    }
}
