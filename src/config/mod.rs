//! Site configuration
/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Dictionary file pattern matcher
mod matcher;
/// Configuration types and settings
mod types;

pub use manager::ConfigManager;
pub use matcher::{
    FileMatcher,
    MatcherError,
};
pub use types::{
    ConfigError,
    DictionaryFilesConfig,
    Integration,
    SiteSettings,
    ValidationError,
};
