/*!
 * Simulator Configuration
 *
 * Startup settings read from the environment.
 */

use super::limits::{
    DEFAULT_PROMPT, ENV_ALLOCATOR, ENV_MEMORY_SIZE, ENV_PROMPT, ENV_TRACE_JSON,
};
use super::types::Size;
use crate::memory::PlacementPolicy;
use thiserror::Error;

/// Configuration errors, reported before the shell starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got '{value}'")]
    InvalidSize { key: &'static str, value: String },

    #[error("{key} must be one of first, best or worst, got '{value}'")]
    InvalidPolicy { key: &'static str, value: String },
}

/// Simulator configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    /// Size of the address space created at startup, if any
    pub initial_memory: Option<Size>,

    /// Placement policy the session starts with (default: first-fit)
    pub policy: PlacementPolicy,

    /// Prompt printed before each command (default: "> ")
    pub prompt: String,

    /// Emit JSON log lines (default: false)
    pub trace_json: bool,
}

impl SimulatorConfig {
    /// Create default configuration
    pub fn new() -> Self {
        Self {
            initial_memory: None,
            policy: PlacementPolicy::default(),
            prompt: DEFAULT_PROMPT.to_string(),
            trace_json: false,
        }
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(value) = lookup(ENV_MEMORY_SIZE) {
            let size = value
                .trim()
                .parse::<Size>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| ConfigError::InvalidSize {
                    key: ENV_MEMORY_SIZE,
                    value: value.clone(),
                })?;
            config.initial_memory = Some(size);
        }

        if let Some(value) = lookup(ENV_ALLOCATOR) {
            config.policy = value.parse().map_err(|_| ConfigError::InvalidPolicy {
                key: ENV_ALLOCATOR,
                value: value.clone(),
            })?;
        }

        if let Some(prompt) = lookup(ENV_PROMPT) {
            config.prompt = prompt;
        }

        config.trace_json = lookup(ENV_TRACE_JSON)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(config)
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
