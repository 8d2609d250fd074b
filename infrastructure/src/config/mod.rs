//! Configuration loading and file structure

pub mod file_config;
pub mod loader;

pub use file_config::{
    ConfigError, FileChainConfig, FileConfig, FileGenerationConfig, FileLimitsConfig,
    FileProviderConfig,
};
pub use loader::ConfigLoader;
