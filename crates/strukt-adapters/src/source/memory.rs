//! Static workspace source for testing.

use strukt_core::{application::ports::WorkspaceSource, error::StruktResult};

/// Serves one fixed document regardless of the requested source.
#[derive(Debug, Clone)]
pub struct StaticSource {
    payload: String,
}

impl StaticSource {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl WorkspaceSource for StaticSource {
    fn read(&self, _source: &str) -> StruktResult<String> {
        Ok(self.payload.clone())
    }
}
