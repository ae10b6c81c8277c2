use serde::{Deserialize, Serialize};

/// One entry of the configured target list, as written in the JSON payload
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TargetDescriptor {
    pub name: String,
    pub url: String,
    pub anon_key: String,
    #[serde(default)]
    pub table: Option<String>,
}

/// A remote data service to keep awake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub name: String,
    pub base_url: String,
    pub credential: String,
    pub table_name: String,
}

impl ProbeTarget {
    pub fn from_descriptor(descriptor: TargetDescriptor, default_table: &str) -> Self {
        let table_name = descriptor
            .table
            .filter(|table| !table.is_empty())
            .unwrap_or_else(|| default_table.to_string());

        Self {
            name: descriptor.name,
            base_url: descriptor.url.trim_end_matches('/').to_string(),
            credential: descriptor.anon_key,
            table_name,
        }
    }

    /// Cheapest existence read against the target's REST interface
    pub fn query_url(&self) -> String {
        format!(
            "{}/rest/v1/{}?select=id&limit=1",
            self.base_url, self.table_name
        )
    }
}
