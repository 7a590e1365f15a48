mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DEFAULT_HOST, DEFAULT_PORT, LlmProvider, LlmSettings, LoggingSettings, ServerSettings,
    Settings, SettingsError,
};
