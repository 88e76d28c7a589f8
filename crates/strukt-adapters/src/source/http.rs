//! HTTP(S) workspace source.
//!
//! One blocking GET per parse; no retry and no timeout policy of its own.

use tracing::debug;

use strukt_core::{
    application::{ApplicationError, ports::WorkspaceSource},
    error::StruktResult,
};

/// Fetches workspace documents over HTTP(S).
#[derive(Debug, Clone, Default)]
pub struct HttpSource;

impl HttpSource {
    pub fn new() -> Self {
        Self
    }
}

impl WorkspaceSource for HttpSource {
    fn read(&self, source: &str) -> StruktResult<String> {
        debug!(url = %source, "Fetching workspace");

        let fetch = |url: &str| -> Result<String, reqwest::Error> {
            let client = reqwest::blocking::Client::builder().build()?;
            client.get(url).send()?.error_for_status()?.text()
        };

        fetch(source).map_err(|e| {
            ApplicationError::Fetch {
                url: source.to_owned(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}
