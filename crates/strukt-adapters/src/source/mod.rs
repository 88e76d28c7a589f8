//! Workspace source adapters.
//!
//! A `source` option is either a local path or an `http://`/`https://`
//! URL; [`WorkspaceReader`] dispatches between the two concrete readers.

pub mod http;
pub mod local;
pub mod memory;

pub use http::HttpSource;
pub use local::LocalSource;
pub use memory::StaticSource;

use std::path::PathBuf;

use strukt_core::{application::ports::WorkspaceSource, error::StruktResult};

/// Production workspace source: local files and HTTP(S) URLs.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceReader {
    local: LocalSource,
    http: HttpSource,
}

impl WorkspaceReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative file paths against `base_dir` (the directory
    /// containing the inventory config).
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            local: LocalSource::with_base_dir(base_dir),
            http: HttpSource::new(),
        }
    }
}

impl WorkspaceSource for WorkspaceReader {
    fn read(&self, source: &str) -> StruktResult<String> {
        if source.starts_with("http://") || source.starts_with("https://") {
            self.http.read(source)
        } else {
            self.local.read(source)
        }
    }
}
