//! Level-based log routing.
//!
//! Each [`LevelHandler`] owns exactly one [`LogLevel`]; a message travels
//! down `[debug, info, error]` until it reaches the handler for its level.

use super::errors::HandlerResult;
use super::handler::Handler;
use super::handler_chain::HandlerChain;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug = 1,
    Info,
    Error,
}

impl LogLevel {
    /// Label used when a handler reports what it printed
    pub fn label(&self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "error" => Ok(Self::Error),
            _ => Err(format!("Invalid log level: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
}

impl LogMessage {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// `LEVEL message`
    pub fn description(&self) -> String {
        format!("{} {}", self.level, self.message)
    }
}

/// Handler that accepts messages of one level only
#[derive(Debug, Clone, Copy)]
pub struct LevelHandler {
    level: LogLevel,
}

impl LevelHandler {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    pub fn debug() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn info() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn error() -> Self {
        Self::new(LogLevel::Error)
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }
}

impl Handler<LogMessage> for LevelHandler {
    type Output = String;

    fn name(&self) -> &'static str {
        match self.level {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Error => "error",
        }
    }

    fn can_handle(&self, request: &LogMessage) -> bool {
        request.level == self.level
    }

    fn handle(&self, request: &LogMessage) -> HandlerResult<String> {
        let line = format!("printed via {}: {}", self.level.label(), request.description());
        tracing::info!(target: "behavior_kit::log_routing", level = %self.level, "{line}");
        Ok(line)
    }
}

/// The `[debug, info, error]` routing chain
pub fn log_routing_chain() -> HandlerChain<LogMessage, String> {
    HandlerChain::builder("log_routing")
        .with_handler(LevelHandler::debug())
        .with_handler(LevelHandler::info())
        .with_handler(LevelHandler::error())
        .build()
}
