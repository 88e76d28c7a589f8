//! Local file workspace source using std::fs.

use std::path::{Path, PathBuf};

use tracing::debug;

use strukt_core::{
    application::{ApplicationError, ports::WorkspaceSource},
    error::StruktResult,
};

/// Reads workspace documents from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocalSource {
    base_dir: Option<PathBuf>,
}

impl LocalSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn resolve(&self, source: &str) -> PathBuf {
        let path = Path::new(source);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl WorkspaceSource for LocalSource {
    fn read(&self, source: &str) -> StruktResult<String> {
        let path = self.resolve(source);
        debug!(path = %path.display(), "Reading workspace file");

        std::fs::read_to_string(&path).map_err(|e| {
            ApplicationError::SourceRead {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_absolute_paths() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let source = LocalSource::new();
        assert_eq!(source.read(file.path().to_str().unwrap()).unwrap(), "{}");
    }

    #[test]
    fn relative_paths_resolve_against_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("workspace.json"), "{}").unwrap();

        let source = LocalSource::with_base_dir(dir.path());
        assert_eq!(source.read("workspace.json").unwrap(), "{}");
    }

    #[test]
    fn absolute_paths_ignore_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let source = LocalSource::with_base_dir(dir.path());
        assert_eq!(source.read(file.path().to_str().unwrap()).unwrap(), "{}");
    }

    #[test]
    fn missing_file_maps_to_source_read_error() {
        let source = LocalSource::new();
        let err = source.read("/nonexistent/workspace.json").unwrap_err();
        assert!(err.to_string().contains("Unable to read"));
    }
}
