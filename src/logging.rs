//! # Structured Logging Module
//!
//! `tracing` subscriber setup plus the structured events the state machines
//! emit. Library code only emits events; installing a subscriber is left to
//! the application through [`init_structured_logging`].

use crate::config::LoggingConfig;
use std::fmt::Display;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable that overrides the configured filter
pub const LOG_FILTER_ENV: &str = "BEHAVIOR_KIT_LOG";

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging
///
/// Safe to call more than once; only the first call installs a subscriber,
/// and an already installed global subscriber is left in place.
pub fn init_structured_logging(config: &LoggingConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = build_filter(config);

        let result = if config.json {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .json()
                        .with_filter(filter),
                )
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_filter(filter),
                )
                .try_init()
        };

        if result.is_err() {
            tracing::debug!("Global tracing subscriber already initialized - continuing with existing subscriber");
        }

        tracing::info!(json = config.json, level = %config.level, "Structured logging initialized");
    });
}

/// Filter from `BEHAVIOR_KIT_LOG`, falling back to the configured level
fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log an applied state transition
pub fn log_transition(machine: &str, from: &impl Display, to: &impl Display, event: &str) {
    tracing::info!(
        machine = %machine,
        from = %from,
        to = %to,
        event = %event,
        "State transition"
    );
}

/// Log an event the current state refused
pub fn log_ignored_event(machine: &str, state: &impl Display, event: &str, diagnostic: &str) {
    tracing::warn!(
        machine = %machine,
        state = %state,
        event = %event,
        diagnostic = %diagnostic,
        "Event ignored in current state"
    );
}
