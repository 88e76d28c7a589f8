//! In-memory cache store for testing.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use strukt_core::{
    application::{ApplicationError, ports::CacheStore},
    error::StruktResult,
};

/// In-memory cache for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached entries (testing helper).
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CacheStore for MemoryCache {
    fn get(&self, key: &str) -> StruktResult<Option<String>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::Cache {
            reason: "cache lock poisoned".into(),
        })?;
        Ok(inner.get(key).cloned())
    }

    fn set(&self, key: &str, payload: &str) -> StruktResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::Cache {
            reason: "cache lock poisoned".into(),
        })?;
        inner.insert(key.to_owned(), payload.to_owned());
        Ok(())
    }
}
