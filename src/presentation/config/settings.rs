use serde::Deserialize;

use super::Environment;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8083;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub provider: LlmProvider,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum LlmProvider {
    #[default]
    Fake,
    Echo,
}

impl TryFrom<String> for LlmProvider {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "fake" => Ok(Self::Fake),
            "echo" => Ok(Self::Echo),
            other => Err(format!(
                "Invalid LLM provider: {}. Expected: fake or echo",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json_format: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

impl Settings {
    /// Reads `APP_ENV`, `SERVER_HOST`, `SERVER_PORT`, `LLM_PROVIDER` and
    /// `LOG_FORMAT`, falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(value) = lookup("APP_ENV") {
            settings.environment = Environment::try_from(value)
                .map_err(|message| SettingsError::Invalid {
                    key: "APP_ENV",
                    message,
                })?;
        }

        if let Some(host) = lookup("SERVER_HOST").filter(|h| !h.trim().is_empty()) {
            settings.server.host = host;
        }

        if let Some(value) = lookup("SERVER_PORT") {
            settings.server.port = value.parse().map_err(|e: std::num::ParseIntError| {
                SettingsError::Invalid {
                    key: "SERVER_PORT",
                    message: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup("LLM_PROVIDER") {
            settings.llm.provider = LlmProvider::try_from(value)
                .map_err(|message| SettingsError::Invalid {
                    key: "LLM_PROVIDER",
                    message,
                })?;
        }

        settings.logging.json_format = lookup("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Ok(settings)
    }
}
