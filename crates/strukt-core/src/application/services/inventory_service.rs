//! Inventory Service - main application orchestrator.
//!
//! This service coordinates the entire parse workflow:
//! 1. Resolve the source location (configuration error when missing)
//! 2. Obtain the raw workspace (cache short-circuit, else read + cache)
//! 3. Parse the JSON document
//! 4. Walk the deployment tree into the inventory
//! 5. Revisit each materialized host through the constructed-rules port
//!
//! It implements the driving port (incoming) and uses driven ports
//! (outgoing).

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CacheStore, ConstructedRules, Inventory, WorkspaceSource},
        services::walker::TreeWalker,
    },
    domain::{ParseOptions, Workspace},
    error::{StruktError, StruktResult},
};

/// Outcome of one parse run, for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSummary {
    /// Number of hosts materialized.
    pub hosts: usize,
}

/// Main parse service.
///
/// Orchestrates source retrieval, caching, traversal, and the constructed
/// post-pass. One instance performs one synchronous parse per call; it
/// holds no inventory state itself.
pub struct InventoryService {
    reader: Box<dyn WorkspaceSource>,
    rules: Box<dyn ConstructedRules>,
    options: ParseOptions,
    source: Option<String>,
    cache: Option<Box<dyn CacheStore>>,
    cache_key: String,
    flush_cache: bool,
}

impl InventoryService {
    /// Create a new service with the given adapters.
    pub fn new(
        reader: Box<dyn WorkspaceSource>,
        rules: Box<dyn ConstructedRules>,
        options: ParseOptions,
    ) -> Self {
        Self {
            reader,
            rules,
            options,
            source: None,
            cache: None,
            cache_key: String::new(),
            flush_cache: false,
        }
    }

    /// Set the workspace location (path or URL).
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Enable caching of the raw workspace payload under `key`.
    pub fn with_cache(mut self, cache: Box<dyn CacheStore>, key: impl Into<String>) -> Self {
        self.cache = Some(cache);
        self.cache_key = key.into();
        self
    }

    /// Skip the cache read and rewrite the entry on this run.
    pub fn with_flush_cache(mut self, flush: bool) -> Self {
        self.flush_cache = flush;
        self
    }

    /// Parse the configured source into `inventory`.
    #[instrument(skip_all)]
    pub fn parse(&self, inventory: &dyn Inventory) -> StruktResult<ParseSummary> {
        let source = self
            .source
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| StruktError::Configuration {
                message: "'source' option is required".into(),
            })?;

        let raw = self.obtain_workspace(source)?;

        let workspace: Workspace =
            serde_json::from_str(&raw).map_err(|e| ApplicationError::InvalidJson {
                location: source.to_owned(),
                reason: e.to_string(),
            })?;

        let mut walker = TreeWalker::new(inventory, &self.options);
        walker.walk_model(&workspace.model)?;
        let hosts = walker.into_hosts();

        for (host, vars) in &hosts {
            self.rules.apply(inventory, host, vars)?;
        }

        info!(hosts = hosts.len(), source = %source, "Parse completed");
        Ok(ParseSummary { hosts: hosts.len() })
    }

    /// Return the raw workspace text, honoring the cache policy.
    ///
    /// Cache failures are never fatal: a failed read degrades to a fresh
    /// source read, a failed write is logged and ignored.
    fn obtain_workspace(&self, source: &str) -> StruktResult<String> {
        if let Some(cache) = &self.cache {
            if !self.flush_cache {
                match cache.get(&self.cache_key) {
                    Ok(Some(payload)) => {
                        debug!(key = %self.cache_key, "Workspace cache hit");
                        return Ok(payload);
                    }
                    Ok(None) => debug!(key = %self.cache_key, "Workspace cache miss"),
                    Err(e) => warn!(error = %e, "Cache read failed, reading source"),
                }
            }
        }

        let raw = self.reader.read(source)?;

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.set(&self.cache_key, &raw) {
                warn!(error = %e, "Cache update failed");
            }
        }

        Ok(raw)
    }
}
