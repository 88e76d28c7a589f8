//! Cache store adapters.

pub mod local;
pub mod memory;

pub use local::LocalCache;
pub use memory::MemoryCache;

use std::path::Path;

use sha2::{Digest, Sha256};

/// Derive the cache key for an inventory config path.
///
/// The key is stable for a given config location: the canonical path is
/// hashed so two configs pointing at the same source still cache
/// independently.
pub fn cache_key(config_path: &Path) -> String {
    let canonical = config_path
        .canonicalize()
        .unwrap_or_else(|_| config_path.to_path_buf());

    let digest = Sha256::digest(canonical.to_string_lossy().as_bytes());
    let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    format!("strukt_{}", &hex[..16])
}
