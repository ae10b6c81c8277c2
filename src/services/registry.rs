use std::collections::HashSet;
use std::env;

use crate::errors::{PingerError, Result};
use crate::models::target::{ProbeTarget, TargetDescriptor};

/// Where the raw target list comes from
pub trait TargetSource: Send + Sync {
    /// Current payload, or `None` when nothing is configured
    fn read(&self) -> Option<String>;

    /// Human-readable name used in configuration errors
    fn describe(&self) -> String;
}

/// Reads the payload from an environment variable on every call
#[derive(Debug, Clone)]
pub struct EnvSource {
    var: String,
}

impl EnvSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl TargetSource for EnvSource {
    fn read(&self) -> Option<String> {
        env::var(&self.var).ok()
    }

    fn describe(&self) -> String {
        self.var.clone()
    }
}

/// Fixed payload, for embedding and tests
#[derive(Debug, Clone)]
pub struct StaticSource {
    payload: Option<String>,
}

impl StaticSource {
    pub fn new(payload: Option<&str>) -> Self {
        Self {
            payload: payload.map(str::to_string),
        }
    }
}

impl TargetSource for StaticSource {
    fn read(&self) -> Option<String> {
        self.payload.clone()
    }

    fn describe(&self) -> String {
        "static target list".to_string()
    }
}

pub struct TargetRegistry {
    source: Box<dyn TargetSource>,
    default_table: String,
}

impl TargetRegistry {
    pub fn new(source: impl TargetSource + 'static, default_table: impl Into<String>) -> Self {
        Self {
            source: Box::new(source),
            default_table: default_table.into(),
        }
    }

    /// Parse the source into targets, in payload order.
    ///
    /// The source is re-read on each call so edits to the configuration apply
    /// to the next trigger without a restart.
    pub fn load_targets(&self) -> Result<Vec<ProbeTarget>> {
        let origin = self.source.describe();
        let raw = self.source.read().unwrap_or_default();

        if raw.trim().is_empty() {
            return Err(PingerError::Config(format!("{} is empty or missing", origin)));
        }

        let descriptors: Vec<TargetDescriptor> = serde_json::from_str(&raw).map_err(|e| {
            PingerError::Config(format!("{} is not a valid target list: {}", origin, e))
        })?;

        if descriptors.is_empty() {
            return Err(PingerError::Config(format!("{} is empty or missing", origin)));
        }

        let mut seen = HashSet::new();
        for (index, descriptor) in descriptors.iter().enumerate() {
            if descriptor.name.is_empty() {
                return Err(PingerError::Config(format!(
                    "target at index {} has an empty name",
                    index
                )));
            }

            if descriptor.url.is_empty() {
                return Err(PingerError::Config(format!(
                    "target '{}' has an empty url",
                    descriptor.name
                )));
            }

            if !seen.insert(descriptor.name.as_str()) {
                return Err(PingerError::Config(format!(
                    "target name '{}' appears more than once",
                    descriptor.name
                )));
            }
        }

        Ok(descriptors
            .into_iter()
            .map(|descriptor| ProbeTarget::from_descriptor(descriptor, &self.default_table))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn registry(payload: Option<&str>) -> TargetRegistry {
        TargetRegistry::new(StaticSource::new(payload), "healthcheck")
    }

    fn config_message(result: Result<Vec<ProbeTarget>>) -> String {
        match result {
            Err(PingerError::Config(msg)) => msg,
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_preserves_order() {
        let targets = registry(Some(
            r#"[
                {"name": "b", "url": "https://b.test/", "anon_key": "kb"},
                {"name": "a", "url": "https://a.test", "anon_key": "ka", "table": "users"},
                {"name": "c", "url": "https://c.test", "anon_key": "kc"}
            ]"#,
        ))
        .load_targets()
        .unwrap();

        let names: Vec<&str> = targets.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(targets[0].base_url, "https://b.test");
        assert_eq!(targets[0].table_name, "healthcheck");
        assert_eq!(targets[1].table_name, "users");
    }

    #[test]
    fn test_absent_payload_is_config_error() {
        assert!(config_message(registry(None).load_targets()).contains("empty or missing"));
    }

    #[test]
    fn test_empty_list_is_config_error() {
        assert!(config_message(registry(Some("[]")).load_targets()).contains("empty or missing"));
    }

    #[test]
    fn test_malformed_payload_is_config_error() {
        let message = config_message(registry(Some("{not json")).load_targets());
        assert!(message.contains("not a valid target list"));
    }

    #[test]
    fn test_missing_credential_is_config_error() {
        let payload = r#"[{"name": "a", "url": "https://a.test"}]"#;
        let message = config_message(registry(Some(payload)).load_targets());
        assert!(message.contains("anon_key"));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let payload = r#"[
            {"name": "a", "url": "https://a.test", "anon_key": "k"},
            {"name": "a", "url": "https://b.test", "anon_key": "k"}
        ]"#;
        let message = config_message(registry(Some(payload)).load_targets());
        assert!(message.contains("more than once"));
    }

    #[test]
    fn test_empty_url_rejected() {
        let payload = r#"[{"name": "a", "url": "", "anon_key": "k"}]"#;
        assert!(config_message(registry(Some(payload)).load_targets()).contains("empty url"));
    }

    struct SwappableSource(Arc<Mutex<Option<String>>>);

    impl TargetSource for SwappableSource {
        fn read(&self) -> Option<String> {
            self.0.lock().unwrap().clone()
        }

        fn describe(&self) -> String {
            "swappable".to_string()
        }
    }

    #[test]
    fn test_source_reread_on_every_load() {
        let payload = Arc::new(Mutex::new(Some(
            r#"[{"name": "a", "url": "https://a.test", "anon_key": "k"}]"#.to_string(),
        )));
        let registry = TargetRegistry::new(SwappableSource(payload.clone()), "healthcheck");

        assert_eq!(registry.load_targets().unwrap().len(), 1);

        *payload.lock().unwrap() = Some(
            r#"[
                {"name": "a", "url": "https://a.test", "anon_key": "k"},
                {"name": "b", "url": "https://b.test", "anon_key": "k"}
            ]"#
            .to_string(),
        );
        assert_eq!(registry.load_targets().unwrap().len(), 2);

        *payload.lock().unwrap() = None;
        assert!(registry.load_targets().is_err());
    }
}
