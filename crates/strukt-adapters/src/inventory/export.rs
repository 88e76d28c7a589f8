//! Inventory rendering.
//!
//! Produces the classic dynamic-inventory JSON document (`_meta.hostvars`,
//! `all.children`, `ungrouped`, one object per group) plus the per-host
//! variable document and the `@group` tree view that orchestration tooling
//! expects.

use serde_json::{Map, Value, json};

use strukt_core::domain::HostVars;

use crate::inventory::MemoryInventory;

fn vars_to_object(vars: &HostVars) -> Value {
    let mut object = Map::new();
    for (key, value) in vars {
        object.insert(key.clone(), value.clone());
    }
    Value::Object(object)
}

impl MemoryInventory {
    /// Render the full dynamic-inventory document.
    pub fn to_dynamic_inventory(&self) -> Value {
        let mut document = Map::new();

        let mut hostvars = Map::new();
        for host in self.hosts() {
            let vars = self.host_vars(&host).unwrap_or_default();
            hostvars.insert(host, vars_to_object(&vars));
        }
        document.insert("_meta".into(), json!({ "hostvars": hostvars }));

        let mut all_children = vec![Value::from("ungrouped")];
        all_children.extend(self.top_level_groups().into_iter().map(Value::from));
        document.insert("all".into(), json!({ "children": all_children }));

        let ungrouped = self.ungrouped_hosts();
        if !ungrouped.is_empty() {
            document.insert("ungrouped".into(), json!({ "hosts": ungrouped }));
        }

        for group in self.groups() {
            let mut entry = Map::new();
            let hosts = self.hosts_of(&group);
            if !hosts.is_empty() {
                entry.insert("hosts".into(), json!(hosts));
            }
            let children = self.children_of(&group);
            if !children.is_empty() {
                entry.insert("children".into(), json!(children));
            }
            document.insert(group, Value::Object(entry));
        }

        Value::Object(document)
    }

    /// Render one host's variable mapping, if the host exists.
    pub fn host_document(&self, host: &str) -> Option<Value> {
        self.host_vars(host).map(|vars| vars_to_object(&vars))
    }

    /// Render the group tree view:
    ///
    /// ```text
    /// @all:
    ///   |--@env_production:
    ///   |  |--web-prod-01
    ///   |--@ungrouped:
    /// ```
    ///
    /// Groups reachable through several parents are printed under each;
    /// the group graph is acyclic by construction (children are only ever
    /// registered under strict ancestors).
    pub fn graph(&self) -> String {
        let mut out = String::from("@all:\n");

        for group in self.top_level_groups() {
            self.graph_group(&mut out, &group, 1);
        }

        out.push_str(&format!("{}@ungrouped:\n", indent(1)));
        for host in self.ungrouped_hosts() {
            out.push_str(&format!("{}{}\n", indent(2), host));
        }

        out
    }

    fn graph_group(&self, out: &mut String, group: &str, depth: usize) {
        out.push_str(&format!("{}@{}:\n", indent(depth), group));
        for child in self.children_of(group) {
            self.graph_group(out, &child, depth + 1);
        }
        for host in self.hosts_of(group) {
            out.push_str(&format!("{}{}\n", indent(depth + 1), host));
        }
    }
}

fn indent(depth: usize) -> String {
    let mut prefix = String::from("  ");
    for _ in 1..depth {
        prefix.push_str("|  ");
    }
    prefix.push_str("|--");
    prefix
}
