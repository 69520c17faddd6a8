//! Station name lookup.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::Telecode;

use super::cache::{StationCache, StationEntry};
use super::error::StationError;

/// The bundled station dataset: one `"<name> <telecode>"` per line.
const STATION_DATASET: &str = include_str!("../../data/stations.txt");

/// Name → telecode directory.
///
/// Lookups are case-sensitive exact matches; there is no fuzzy
/// matching. Non-empty after any successful load.
#[derive(Debug, Clone)]
pub struct StationDirectory {
    codes: HashMap<String, Telecode>,
}

impl StationDirectory {
    /// Load the directory, preferring the disk cache.
    ///
    /// A missing, corrupt, or empty cache falls back silently to the
    /// bundled dataset; the rebuilt directory is then persisted
    /// best-effort (a failed write is logged and ignored).
    pub fn load(cache: &StationCache) -> Self {
        if let Some(entries) = cache.load() {
            let codes = build_map(&entries);
            if !codes.is_empty() {
                debug!(stations = codes.len(), "loaded station directory from cache");
                return Self { codes };
            }
        }

        let entries = parse_dataset(STATION_DATASET);
        debug!(stations = entries.len(), "rebuilt station directory from dataset");

        if let Err(e) = cache.save(&entries) {
            warn!(error = %e, path = %cache.path().display(), "failed to persist station cache");
        }

        Self {
            codes: build_map(&entries),
        }
    }

    /// Build the directory directly from the bundled dataset.
    pub fn from_dataset() -> Self {
        Self {
            codes: build_map(&parse_dataset(STATION_DATASET)),
        }
    }

    /// Resolve a station display name to its telecode.
    pub fn resolve(&self, name: &str) -> Result<Telecode, StationError> {
        self.codes
            .get(name)
            .copied()
            .ok_or_else(|| StationError::NotFound(name.to_string()))
    }

    /// Number of stations in the directory.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Parse the dataset text into station entries.
///
/// Lines that don't hold exactly a name and a code are skipped.
fn parse_dataset(text: &str) -> Vec<StationEntry> {
    text.lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(name), Some(code), None) => Some(StationEntry {
                    name: name.to_string(),
                    code: code.to_string(),
                }),
                _ => None,
            }
        })
        .collect()
}

/// Build the name → telecode map from entries.
///
/// Entries whose code is not a valid telecode are dropped; the first
/// occurrence wins on duplicate names.
fn build_map(entries: &[StationEntry]) -> HashMap<String, Telecode> {
    let mut codes = HashMap::with_capacity(entries.len());
    for entry in entries {
        if let Ok(code) = entry.code.parse::<Telecode>() {
            codes.entry(entry.name.clone()).or_insert(code);
        }
    }
    codes
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn dataset_builds_nonempty_directory() {
        let dir = StationDirectory::from_dataset();
        assert!(!dir.is_empty());
    }

    #[test]
    fn every_dataset_code_is_a_valid_telecode() {
        let entries = parse_dataset(STATION_DATASET);
        assert!(!entries.is_empty());
        for entry in &entries {
            assert!(
                entry.code.parse::<Telecode>().is_ok(),
                "{} {}",
                entry.name,
                entry.code
            );
        }
        // Nothing was dropped building the map, beyond duplicate names
        assert_eq!(build_map(&entries).len(), entries.len());
    }

    #[test]
    fn resolve_known_station() {
        let dir = StationDirectory::from_dataset();
        let code = dir.resolve("北京").unwrap();
        assert_eq!(code.as_str(), "BJP");
    }

    #[test]
    fn resolve_absent_station_fails() {
        let dir = StationDirectory::from_dataset();
        let err = dir.resolve("不存在的站").unwrap_err();
        assert!(matches!(err, StationError::NotFound(name) if name == "不存在的站"));
    }

    #[test]
    fn lookup_is_exact_match() {
        let dir = StationDirectory::from_dataset();
        // No fuzzy matching: a prefix of a known name does not resolve
        assert!(dir.resolve("北").is_err());
    }

    #[test]
    fn first_occurrence_wins_on_duplicate_names() {
        let entries = vec![
            StationEntry {
                name: "北京".to_string(),
                code: "BJP".to_string(),
            },
            StationEntry {
                name: "北京".to_string(),
                code: "XXX".to_string(),
            },
        ];
        let map = build_map(&entries);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("北京").unwrap().as_str(), "BJP");
    }

    #[test]
    fn invalid_codes_are_dropped() {
        let entries = vec![
            StationEntry {
                name: "北京".to_string(),
                code: "BJP".to_string(),
            },
            StationEntry {
                name: "坏站".to_string(),
                code: "bad-code".to_string(),
            },
        ];
        let map = build_map(&entries);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn malformed_dataset_lines_are_skipped() {
        let entries = parse_dataset("北京 BJP\n\njust-one-field\n上海 SHH extra\n上海 SHH\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].code, "BJP");
        assert_eq!(entries[1].code, "SHH");
    }

    #[test]
    fn cached_load_matches_dataset_load() {
        let tmp = tempdir().unwrap();
        let cache = StationCache::at(tmp.path().join("stations.json"));

        // First load populates the cache, second load reads it back
        let first = StationDirectory::load(&cache);
        assert!(cache.path().exists());
        let second = StationDirectory::load(&cache);

        assert_eq!(first.len(), second.len());
        for name in ["北京", "上海", "广州"] {
            assert_eq!(
                first.resolve(name).unwrap().as_str(),
                second.resolve(name).unwrap().as_str()
            );
        }
    }

    #[test]
    fn corrupt_cache_falls_back_to_dataset() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("stations.json");
        std::fs::write(&path, "garbage").unwrap();

        let dir = StationDirectory::load(&StationCache::at(&path));
        assert!(!dir.is_empty());
        assert!(dir.resolve("北京").is_ok());
    }

    #[test]
    fn unwritable_cache_is_nonfatal() {
        let dir = StationDirectory::load(&StationCache::at("/proc/no-such-dir/stations.json"));
        assert!(!dir.is_empty());
    }
}
