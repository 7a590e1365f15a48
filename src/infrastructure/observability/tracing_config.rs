use crate::presentation::config::{Environment, Settings};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Local,
            json_format: false,
        }
    }
}

impl From<&Settings> for TracingConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            environment: settings.environment,
            json_format: settings.logging.json_format,
        }
    }
}
