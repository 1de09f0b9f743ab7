//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use card_round::{RoundConfig, round::ConfigError as RoundConfigError};
use std::path::{Path, PathBuf};

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// File with one card asset name per line; built-in set when absent
    pub catalogue: Option<PathBuf>,
    /// Fixed RNG seed for reproducible hands
    pub seed: Option<u64>,
    /// Timer and gesture configuration
    pub round: RoundConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `catalogue_override` - Optional catalogue path (from CLI args)
    /// * `seed_override` - Optional RNG seed (from CLI args)
    /// * `tick_ms_override` - Optional tick interval (from CLI args)
    pub fn from_env(
        catalogue_override: Option<PathBuf>,
        seed_override: Option<u64>,
        tick_ms_override: Option<u64>,
    ) -> Self {
        let catalogue =
            catalogue_override.or_else(|| std::env::var("CARD_CATALOGUE").ok().map(PathBuf::from));

        let seed = seed_override.or_else(|| {
            std::env::var("ROUND_SEED")
                .ok()
                .and_then(|v| v.parse().ok())
        });

        let mut round = RoundConfig::from_env();
        if let Some(tick_ms) = tick_ms_override {
            round.tick_ms = tick_ms;
        }

        Self {
            catalogue,
            seed,
            round,
        }
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.round.validate()?;

        if let Some(path) = &self.catalogue {
            if !path.is_file() {
                return Err(ConfigError::Invalid {
                    var: "CARD_CATALOGUE".to_string(),
                    reason: format!("{} is not a readable file", path.display()),
                });
            }
        }

        Ok(())
    }

    /// Card asset names for the pool
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Catalogue` if the file cannot be read
    pub fn catalogue_names(&self) -> Result<Vec<String>, ConfigError> {
        match &self.catalogue {
            Some(path) => read_catalogue(path),
            None => Ok(default_catalogue()),
        }
    }
}

/// Fire, Water and Grass at ranks 1 through 10
pub fn default_catalogue() -> Vec<String> {
    ["Fire", "Water", "Grass"]
        .iter()
        .flat_map(|attribute| (1..=10).map(move |rank| format!("{attribute}{rank}")))
        .collect()
}

/// One name per line; blank lines and `#` comments are skipped
fn read_catalogue(path: &Path) -> Result<Vec<String>, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Catalogue {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Round(#[from] RoundConfigError),

    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },

    #[error("Failed to read catalogue {}: {source}", path.display())]
    Catalogue {
        path: PathBuf,
        source: std::io::Error,
    },
}
