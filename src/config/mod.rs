//! Settings for building a translator from a workspace.
/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Configuration types and settings
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use manager::{
    ConfigManager,
    SettingsOverrides,
};
pub use types::{
    ConfigError,
    TranslatorSettings,
    ValidationError,
};
