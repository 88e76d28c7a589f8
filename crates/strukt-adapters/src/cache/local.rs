//! File-backed cache store: one file per key under a cache directory.

use std::io;
use std::path::PathBuf;

use tracing::debug;

use strukt_core::{
    application::{ApplicationError, ports::CacheStore},
    error::StruktResult,
};

/// Caches raw workspace payloads on disk.
#[derive(Debug, Clone)]
pub struct LocalCache {
    dir: PathBuf,
}

impl LocalCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform cache directory for strukt, falling back to `.strukt-cache`
    /// in the current directory.
    pub fn default_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "strukt", "strukt")
            .map(|d| d.cache_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".strukt-cache"))
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl CacheStore for LocalCache {
    fn get(&self, key: &str) -> StruktResult<Option<String>> {
        let path = self.entry_path(key);
        match std::fs::read_to_string(&path) {
            Ok(payload) => {
                debug!(path = %path.display(), "Cache entry read");
                Ok(Some(payload))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ApplicationError::Cache {
                reason: format!("failed to read '{}': {}", path.display(), e),
            }
            .into()),
        }
    }

    fn set(&self, key: &str, payload: &str) -> StruktResult<()> {
        let path = self.entry_path(key);
        std::fs::create_dir_all(&self.dir).map_err(|e| ApplicationError::Cache {
            reason: format!("failed to create '{}': {}", self.dir.display(), e),
        })?;
        std::fs::write(&path, payload).map_err(|e| ApplicationError::Cache {
            reason: format!("failed to write '{}': {}", path.display(), e),
        })?;
        debug!(path = %path.display(), "Cache entry written");
        Ok(())
    }
}
