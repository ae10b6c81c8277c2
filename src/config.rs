//! Process configuration for the pinger

use std::env;
use std::time::Duration;

/// Table queried when a target does not name one
pub const DEFAULT_TABLE: &str = "healthcheck";

/// Per-probe timeout applied to every outbound request
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// Variable holding the JSON list of targets
pub const DEFAULT_TARGETS_ENV_VAR: &str = "SUPABASE_PROJECTS_JSON";

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub host: String,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Environment variable read by the target registry on every trigger
    pub targets_env_var: String,

    /// Timeout for a single probe
    pub probe_timeout: Duration,

    /// Table used for targets without an explicit `table`
    pub default_table: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            targets_env_var: DEFAULT_TARGETS_ENV_VAR.to_string(),
            probe_timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
            default_table: DEFAULT_TABLE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup, falling back to
    /// defaults for absent or unparseable values
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }

        if let Some(port) = lookup("PORT") {
            if let Ok(port) = port.trim().parse() {
                config.port = port;
            }
        }

        if let Some(var) = lookup("TARGETS_ENV_VAR") {
            config.targets_env_var = var;
        }

        if let Some(timeout) = lookup("PROBE_TIMEOUT_SECONDS") {
            if let Ok(seconds) = timeout.trim().parse::<u64>() {
                config.probe_timeout = Duration::from_secs(seconds);
            }
        }

        if let Some(table) = lookup("DEFAULT_TABLE") {
            config.default_table = table;
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("port must be greater than 0".to_string());
        }

        if self.targets_env_var.is_empty() {
            return Err("targets_env_var cannot be empty".to_string());
        }

        if self.probe_timeout.is_zero() {
            return Err("probe_timeout must be greater than 0".to_string());
        }

        if self.default_table.is_empty() {
            return Err("default_table cannot be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.targets_env_var, "SUPABASE_PROJECTS_JSON");
        assert_eq!(config.probe_timeout, Duration::from_secs(10));
        assert_eq!(config.default_table, "healthcheck");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("PROBE_TIMEOUT_SECONDS", "3"),
            ("DEFAULT_TABLE", "pings"),
            ("TARGETS_ENV_VAR", "PROJECTS"),
        ]));

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.probe_timeout, Duration::from_secs(3));
        assert_eq!(config.default_table, "pings");
        assert_eq!(config.targets_env_var, "PROJECTS");
    }

    #[test]
    fn test_unparseable_port_keeps_default() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config::from_lookup(lookup_from(&[("PROBE_TIMEOUT_SECONDS", "0")]));
        assert!(config.validate().unwrap_err().contains("probe_timeout"));
    }

    #[test]
    fn test_validate_rejects_empty_table() {
        let config = Config::from_lookup(lookup_from(&[("DEFAULT_TABLE", "")]));
        assert!(config.validate().is_err());
    }
}
