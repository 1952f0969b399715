//! # Configuration
//!
//! Layered configuration for the toolkit.
//!
//! ## Sources
//!
//! Later sources override earlier ones:
//!
//! 1. Built-in defaults ([`KitConfig::default`])
//! 2. `behavior_kit.toml` in the configuration directory
//! 3. `behavior_kit.<environment>.toml` in the same directory
//! 4. Environment variables prefixed `BEHAVIOR_KIT__`, with `__` between
//!    path segments (e.g. `BEHAVIOR_KIT__STATE_MACHINE__HISTORY_LIMIT=50`)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use behavior_kit::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load()?;
//! let history_limit = manager.config().state_machine.history_limit;
//! let sort = &manager.config().strategy.default_sort;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use crate::strategy::SortAlgorithm;
use serde::{Deserialize, Serialize};

pub use error::{ConfigResult, ConfigurationError};
pub use loader::ConfigManager;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    pub logging: LoggingConfig,
    pub state_machine: StateMachineConfig,
    pub strategy: StrategyConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `BEHAVIOR_KIT_LOG` is not set
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateMachineConfig {
    /// Transitions kept in each machine's history
    pub history_limit: usize,
    /// Log a warning when an event is ignored
    pub warn_on_ignored: bool,
}

impl Default for StateMachineConfig {
    fn default() -> Self {
        Self {
            history_limit: 100,
            warn_on_ignored: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Sorting algorithm installed by `sorter_from_config`
    pub default_sort: String,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            default_sort: "quick".to_string(),
        }
    }
}

impl KitConfig {
    /// Reject values that would make a component unusable
    pub fn validate(&self) -> ConfigResult<()> {
        if self.state_machine.history_limit == 0 {
            return Err(ConfigurationError::invalid_value(
                "state_machine.history_limit",
                "0",
                "history must keep at least one transition",
            ));
        }

        if let Err(e) = self.strategy.default_sort.parse::<SortAlgorithm>() {
            return Err(ConfigurationError::invalid_value(
                "strategy.default_sort",
                &self.strategy.default_sort,
                e.to_string(),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigurationError::invalid_value(
                "logging.level",
                &self.logging.level,
                "log level must not be empty",
            ));
        }

        Ok(())
    }
}
