//! Disk-based cache for the station directory.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::error::StationError;

/// Environment variable overriding the cache file location.
const CACHE_PATH_ENV: &str = "TICKET_QUERY_STATIONS_CACHE";

/// Default cache file name, placed in the system temp directory.
const CACHE_FILE_NAME: &str = "ticket-query.stations.json";

/// One station as stored in the cache file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationEntry {
    pub name: String,
    pub code: String,
}

/// Cached station data with metadata.
#[derive(Debug, Serialize, Deserialize)]
struct CachedStations {
    /// Unix timestamp when the cache was written.
    cached_at_secs: u64,
    /// The cached station entries.
    entries: Vec<StationEntry>,
}

/// Disk cache for station data.
///
/// The cached content is derived from an immutable bundled dataset, so
/// there is no expiry: a readable cache file is always used, and any
/// unreadable or corrupt file simply falls back to a rebuild.
#[derive(Debug, Clone)]
pub struct StationCache {
    path: PathBuf,
}

impl StationCache {
    /// Create a cache at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a cache at the path resolved from the environment.
    ///
    /// Uses `TICKET_QUERY_STATIONS_CACHE` when set, else a file in the
    /// system temp directory.
    pub fn from_env() -> Self {
        let path = std::env::var_os(CACHE_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(CACHE_FILE_NAME));
        Self { path }
    }

    /// Try to load station entries from the cache.
    ///
    /// Returns `None` if the cache doesn't exist or cannot be parsed;
    /// a concurrently-truncated or partially-written file lands here
    /// too, as a parse failure.
    pub fn load(&self) -> Option<Vec<StationEntry>> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        let cached: CachedStations = serde_json::from_str(&contents).ok()?;
        Some(cached.entries)
    }

    /// Save station entries to the cache, creating parent directories
    /// as needed.
    ///
    /// Callers treat failure as non-fatal; the error only carries
    /// enough context to log.
    pub fn save(&self, entries: &[StationEntry]) -> Result<(), StationError> {
        let cached = CachedStations {
            // Informational only; a clock before the epoch just writes 0
            cached_at_secs: SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map_or(0, |d| d.as_secs()),
            entries: entries.to_vec(),
        };

        let json =
            serde_json::to_string(&cached).map_err(|e| cache_error("serialize", &self.path, e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| cache_error("create directory for", &self.path, e))?;
        }

        std::fs::write(&self.path, json).map_err(|e| cache_error("write", &self.path, e))
    }

    /// Get the cache file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn cache_error(action: &str, path: &Path, err: impl std::fmt::Display) -> StationError {
    StationError::Cache {
        message: format!("{action} {}: {err}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entries() -> Vec<StationEntry> {
        vec![
            StationEntry {
                name: "北京".to_string(),
                code: "BJP".to_string(),
            },
            StationEntry {
                name: "上海".to_string(),
                code: "SHH".to_string(),
            },
        ]
    }

    #[test]
    fn save_and_load_cache() {
        let dir = tempdir().unwrap();
        let cache = StationCache::at(dir.path().join("stations.json"));

        cache.save(&entries()).unwrap();

        let loaded = cache.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "北京");
        assert_eq!(loaded[0].code, "BJP");
        assert_eq!(loaded[1].code, "SHH");
    }

    #[test]
    fn missing_cache_returns_none() {
        let cache = StationCache::at("/nonexistent/path/stations.json");
        assert!(cache.load().is_none());
    }

    #[test]
    fn corrupt_cache_returns_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(&path, "not json {{{").unwrap();

        let cache = StationCache::at(&path);
        assert!(cache.load().is_none());
    }

    #[test]
    fn truncated_cache_returns_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.json");

        let cache = StationCache::at(&path);
        cache.save(&entries()).unwrap();

        // Simulate a concurrent writer that has only written half the file
        let full = std::fs::read(&path).unwrap();
        std::fs::write(&path, &full[..full.len() / 2]).unwrap();

        assert!(cache.load().is_none());
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("stations.json");
        let cache = StationCache::at(&path);

        cache.save(&entries()).unwrap();
        assert!(path.exists());
    }
}
