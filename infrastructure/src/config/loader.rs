//! Configuration loader with multi-source merging

use super::file_config::{ConfigError, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `QUOTECRAFT_*` environment variables (`__` separates nesting,
    ///    e.g. `QUOTECRAFT_PROVIDER__API_KEY_ENV`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./quotecraft.toml` or `./.quotecraft.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Project-level config files (check both names)
        for filename in &["quotecraft.toml", ".quotecraft.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        // Explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("QUOTECRAFT_").split("__"));

        figment
            .extract()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Load only default configuration (for callers that skip config files)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }
}
