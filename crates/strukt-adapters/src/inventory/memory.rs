//! In-memory inventory store.
//!
//! This is both the production store (the CLI renders it to JSON after a
//! parse) and the test store: the query helpers below expose everything a
//! test needs to assert on without reaching into internals.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use serde_json::Value;

use strukt_core::{
    application::{ApplicationError, ports::Inventory},
    domain::HostVars,
    error::StruktResult,
};

/// Thread-safe in-memory inventory.
#[derive(Debug, Clone, Default)]
pub struct MemoryInventory {
    inner: Arc<RwLock<MemoryInventoryInner>>,
}

#[derive(Debug, Default)]
pub(crate) struct MemoryInventoryInner {
    /// Hosts in registration order.
    pub(crate) hosts: Vec<String>,
    pub(crate) host_vars: HashMap<String, HostVars>,
    /// Groups in registration order.
    pub(crate) groups: Vec<String>,
    pub(crate) group_hosts: HashMap<String, Vec<String>>,
    pub(crate) group_children: HashMap<String, Vec<String>>,
}

impl MemoryInventory {
    /// Create a new empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(
        &self,
    ) -> StruktResult<std::sync::RwLockReadGuard<'_, MemoryInventoryInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    fn write(&self) -> StruktResult<std::sync::RwLockWriteGuard<'_, MemoryInventoryInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    // ── Query helpers ─────────────────────────────────────────────────────

    /// Hosts in registration order.
    pub fn hosts(&self) -> Vec<String> {
        self.read().map(|i| i.hosts.clone()).unwrap_or_default()
    }

    /// Groups in registration order.
    pub fn groups(&self) -> Vec<String> {
        self.read().map(|i| i.groups.clone()).unwrap_or_default()
    }

    /// Variable map for a host, if it exists.
    pub fn host_vars(&self, host: &str) -> Option<HostVars> {
        self.read().ok()?.host_vars.get(host).cloned()
    }

    /// Host members of a group.
    pub fn hosts_of(&self, group: &str) -> Vec<String> {
        self.read()
            .ok()
            .and_then(|i| i.group_hosts.get(group).cloned())
            .unwrap_or_default()
    }

    /// Child groups of a group.
    pub fn children_of(&self, group: &str) -> Vec<String> {
        self.read()
            .ok()
            .and_then(|i| i.group_children.get(group).cloned())
            .unwrap_or_default()
    }

    pub fn has_host(&self, name: &str) -> bool {
        self.read().map(|i| i.hosts.iter().any(|h| h == name)).unwrap_or(false)
    }

    pub fn has_group(&self, name: &str) -> bool {
        self.read().map(|i| i.groups.iter().any(|g| g == name)).unwrap_or(false)
    }

    /// Hosts that are not a member of any group.
    pub fn ungrouped_hosts(&self) -> Vec<String> {
        let Ok(inner) = self.read() else {
            return Vec::new();
        };
        inner
            .hosts
            .iter()
            .filter(|h| !inner.group_hosts.values().any(|members| members.contains(h)))
            .cloned()
            .collect()
    }

    /// Groups that are not a child of any other group.
    pub fn top_level_groups(&self) -> Vec<String> {
        let Ok(inner) = self.read() else {
            return Vec::new();
        };
        inner
            .groups
            .iter()
            .filter(|g| !inner.group_children.values().any(|children| children.contains(g)))
            .cloned()
            .collect()
    }

    /// Remove all contents.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            *inner = MemoryInventoryInner::default();
        }
    }
}

impl Inventory for MemoryInventory {
    fn add_host(&self, name: &str) -> StruktResult<()> {
        let mut inner = self.write()?;
        if !inner.hosts.iter().any(|h| h == name) {
            inner.hosts.push(name.to_owned());
            inner.host_vars.insert(name.to_owned(), HostVars::new());
        }
        Ok(())
    }

    fn add_group(&self, name: &str) -> StruktResult<()> {
        let mut inner = self.write()?;
        if !inner.groups.iter().any(|g| g == name) {
            inner.groups.push(name.to_owned());
            inner.group_hosts.insert(name.to_owned(), Vec::new());
            inner.group_children.insert(name.to_owned(), Vec::new());
        }
        Ok(())
    }

    fn add_child(&self, parent: &str, child: &str) -> StruktResult<()> {
        let mut inner = self.write()?;
        if !inner.groups.iter().any(|g| g == parent) {
            return Err(ApplicationError::UnknownGroup {
                group: parent.to_owned(),
            }
            .into());
        }

        if inner.groups.iter().any(|g| g == child) {
            let children = inner.group_children.entry(parent.to_owned()).or_default();
            if !children.iter().any(|c| c == child) {
                children.push(child.to_owned());
            }
        } else if inner.hosts.iter().any(|h| h == child) {
            let members = inner.group_hosts.entry(parent.to_owned()).or_default();
            if !members.iter().any(|m| m == child) {
                members.push(child.to_owned());
            }
        } else {
            return Err(ApplicationError::UnknownHost {
                host: child.to_owned(),
            }
            .into());
        }
        Ok(())
    }

    fn set_variable(&self, host: &str, key: &str, value: Value) -> StruktResult<()> {
        let mut inner = self.write()?;
        let Some(vars) = inner.host_vars.get_mut(host) else {
            return Err(ApplicationError::UnknownHost {
                host: host.to_owned(),
            }
            .into());
        };

        if let Some(entry) = vars.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value;
        } else {
            vars.push((key.to_owned(), value));
        }
        Ok(())
    }
}
