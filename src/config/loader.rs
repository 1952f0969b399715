//! Configuration Loader
//!
//! Environment-aware configuration loading. Discovers the base and
//! environment-specific TOML files, layers environment variables on top and
//! validates the merged result.

use super::error::{ConfigResult, ConfigurationError};
use super::KitConfig;
use ::config::{Config, Environment, File, FileFormat};
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

const CONFIG_FILE_STEM: &str = "behavior_kit";
const ENV_PREFIX: &str = "BEHAVIOR_KIT";
const ENV_SEPARATOR: &str = "__";

/// Loaded, validated configuration plus where it came from
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: KitConfig,
    environment: String,
    config_directory: PathBuf,
}

impl ConfigManager {
    /// Load configuration with environment auto-detection
    pub fn load() -> ConfigResult<Arc<ConfigManager>> {
        Self::load_from_directory(None)
    }

    /// Load configuration from a specific directory
    pub fn load_from_directory(config_dir: Option<PathBuf>) -> ConfigResult<Arc<ConfigManager>> {
        let environment = Self::detect_environment();
        Self::load_from_directory_with_env(config_dir, &environment)
    }

    /// Load configuration from a specific directory with explicit environment
    pub fn load_from_directory_with_env(
        config_dir: Option<PathBuf>,
        environment: &str,
    ) -> ConfigResult<Arc<ConfigManager>> {
        Self::load_layered(config_dir, environment, None)
    }

    /// Like [`load_from_directory_with_env`](Self::load_from_directory_with_env), reading
    /// `BEHAVIOR_KIT__*` variables from `env_vars` instead of the process environment
    pub fn load_with_env_vars(
        config_dir: Option<PathBuf>,
        environment: &str,
        env_vars: HashMap<String, String>,
    ) -> ConfigResult<Arc<ConfigManager>> {
        Self::load_layered(config_dir, environment, Some(env_vars))
    }

    /// Load a single, required configuration file plus environment variables
    pub fn load_from_file(path: &Path) -> ConfigResult<Arc<ConfigManager>> {
        if !path.is_file() {
            return Err(ConfigurationError::ConfigFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let config = Self::build(&[(path.to_path_buf(), true)], None)?;
        let config_directory = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Arc::new(ConfigManager {
            config,
            environment: Self::detect_environment(),
            config_directory,
        }))
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &KitConfig {
        &self.config
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn config_directory(&self) -> &Path {
        &self.config_directory
    }

    /// JSON view of the loaded configuration for diagnostics
    pub fn debug_config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    fn load_layered(
        config_dir: Option<PathBuf>,
        environment: &str,
        env_vars: Option<HashMap<String, String>>,
    ) -> ConfigResult<Arc<ConfigManager>> {
        let config_directory = config_dir.unwrap_or_else(Self::default_config_directory);

        debug!(
            "Loading configuration for environment '{}' from directory: {}",
            environment,
            config_directory.display()
        );

        let files = [
            (config_directory.join(format!("{CONFIG_FILE_STEM}.toml")), false),
            (
                config_directory.join(format!("{CONFIG_FILE_STEM}.{environment}.toml")),
                false,
            ),
        ];
        let config = Self::build(&files, env_vars)?;

        Ok(Arc::new(ConfigManager {
            config,
            environment: environment.to_string(),
            config_directory,
        }))
    }

    fn build(
        files: &[(PathBuf, bool)],
        env_vars: Option<HashMap<String, String>>,
    ) -> ConfigResult<KitConfig> {
        let mut builder = Config::builder().add_source(Config::try_from(&KitConfig::default())?);

        for (path, required) in files {
            debug!(
                path = %path.display(),
                exists = path.is_file(),
                required,
                "Adding configuration file source"
            );
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(*required),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true)
                .source(env_vars),
        );

        let config: KitConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        debug!(
            history_limit = config.state_machine.history_limit,
            default_sort = %config.strategy.default_sort,
            log_level = %config.logging.level,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Get current environment from environment variables
    fn detect_environment() -> String {
        env::var("BEHAVIOR_KIT_ENV")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string())
    }

    fn default_config_directory() -> PathBuf {
        env::var("BEHAVIOR_KIT_CONFIG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config"))
    }
}
