//! Round configuration models.

use crate::{
    selection::gesture::{DEFAULT_DOUBLE_TAP, DEFAULT_DRAG_SELECT_HEIGHT},
    timer::{DEFAULT_DECISION, DEFAULT_DECISION_WARNING, DEFAULT_KICK, DEFAULT_KICK_WARNING},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timer thresholds and gesture tuning for a round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Decision window in seconds (default: 30)
    pub decision_secs: u64,

    /// Remaining seconds at which the auto-select prompt appears (default: 10)
    pub decision_warning_secs: u64,

    /// Inactivity before a forced exit, in seconds (default: 90)
    pub kick_secs: u64,

    /// Remaining seconds at which the kick warning appears (default: 15)
    pub kick_warning_secs: u64,

    /// Cards the player sends before the hand is done (default: 1)
    pub picks_per_round: usize,

    /// Double-tap window in milliseconds (default: 400)
    pub double_tap_ms: u64,

    /// Height a card must be dragged past to be sent (default: 150)
    pub drag_select_height: f32,

    /// Actor tick interval in milliseconds (default: 100)
    pub tick_ms: u64,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            decision_secs: DEFAULT_DECISION.as_secs(),
            decision_warning_secs: DEFAULT_DECISION_WARNING.as_secs(),
            kick_secs: DEFAULT_KICK.as_secs(),
            kick_warning_secs: DEFAULT_KICK_WARNING.as_secs(),
            picks_per_round: 1,
            double_tap_ms: DEFAULT_DOUBLE_TAP.as_millis() as u64,
            drag_select_height: DEFAULT_DRAG_SELECT_HEIGHT,
            tick_ms: 100,
        }
    }
}

impl RoundConfig {
    /// Load configuration from `ROUND_*` environment variables, falling back
    /// to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            decision_secs: parse_env_or("ROUND_DECISION_SECS", defaults.decision_secs),
            decision_warning_secs: parse_env_or(
                "ROUND_DECISION_WARNING_SECS",
                defaults.decision_warning_secs,
            ),
            kick_secs: parse_env_or("ROUND_KICK_SECS", defaults.kick_secs),
            kick_warning_secs: parse_env_or("ROUND_KICK_WARNING_SECS", defaults.kick_warning_secs),
            picks_per_round: parse_env_or("ROUND_PICKS_PER_ROUND", defaults.picks_per_round),
            double_tap_ms: parse_env_or("ROUND_DOUBLE_TAP_MS", defaults.double_tap_ms),
            drag_select_height: parse_env_or(
                "ROUND_DRAG_SELECT_HEIGHT",
                defaults.drag_select_height,
            ),
            tick_ms: parse_env_or("ROUND_TICK_MS", defaults.tick_ms),
        }
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the offending variable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decision_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "ROUND_DECISION_SECS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.kick_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "ROUND_KICK_SECS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.kick_warning_secs > self.kick_secs {
            return Err(ConfigError::Invalid {
                var: "ROUND_KICK_WARNING_SECS".to_string(),
                reason: format!("Cannot exceed kick time ({})", self.kick_secs),
            });
        }

        if self.picks_per_round == 0 || self.picks_per_round > crate::cards::HAND_SIZE {
            return Err(ConfigError::Invalid {
                var: "ROUND_PICKS_PER_ROUND".to_string(),
                reason: format!("Must be between 1 and {}", crate::cards::HAND_SIZE),
            });
        }

        if !self.drag_select_height.is_finite() {
            return Err(ConfigError::Invalid {
                var: "ROUND_DRAG_SELECT_HEIGHT".to_string(),
                reason: "Must be a finite number".to_string(),
            });
        }

        if self.tick_ms == 0 {
            return Err(ConfigError::Invalid {
                var: "ROUND_TICK_MS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    pub fn decision(&self) -> Duration {
        Duration::from_secs(self.decision_secs)
    }

    pub fn decision_warning(&self) -> Duration {
        Duration::from_secs(self.decision_warning_secs)
    }

    pub fn kick(&self) -> Duration {
        Duration::from_secs(self.kick_secs)
    }

    pub fn kick_warning(&self) -> Duration {
        Duration::from_secs(self.kick_warning_secs)
    }

    pub fn double_tap(&self) -> Duration {
        Duration::from_millis(self.double_tap_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
pub(crate) fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
