use crate::config::Config;
use crate::errors::Result;
use crate::services::prober::Prober;
use crate::services::registry::{EnvSource, TargetRegistry};

// App state
pub struct AppState {
    pub registry: TargetRegistry,
    pub prober: Prober,
}

impl AppState {
    pub fn new(registry: TargetRegistry, prober: Prober) -> Self {
        Self { registry, prober }
    }

    /// Targets are read from the configured environment variable per trigger
    pub fn from_config(config: &Config) -> Result<Self> {
        let registry = TargetRegistry::new(
            EnvSource::new(config.targets_env_var.clone()),
            config.default_table.clone(),
        );
        let prober = Prober::new(config.probe_timeout)?;

        Ok(Self::new(registry, prober))
    }
}
