//! Configuration for edittrail.
//!
//! This module provides the configuration structure for edittrail with
//! sensible defaults and serde support. Configuration is loaded from a TOML
//! file; any read or parse failure (including a non-numeric value for an
//! integer option) falls back to the defaults, so configuration can never
//! make the tracker fail.
//!
//! # Example
//!
//! ```
//! use edittrail::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.max_locations, 1000);
//!
//! // Create custom configuration
//! let custom = Config { max_locations: 200 };
//! assert_eq!(custom.effective_max_locations(), 200);
//! ```

use serde::{Deserialize, Serialize};

use crate::tracker::history::{DEFAULT_MAX_LOCATIONS, MIN_MAX_LOCATIONS};

/// Configuration for the edit-location tracker.
///
/// # Fields
///
/// * `max_locations` - Maximum number of edit locations kept in history
///   (default: 1000, enforced floor: 2)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of edit locations kept in history
    #[serde(default = "default_max_locations")]
    pub max_locations: usize,
}

/// Returns the default maximum history length.
fn default_max_locations() -> usize {
    DEFAULT_MAX_LOCATIONS
}

impl Default for Config {
    /// Creates a new configuration with default values.
    fn default() -> Self {
        Self {
            max_locations: default_max_locations(),
        }
    }
}

impl Config {
    /// Returns the configured maximum with the floor of 2 applied.
    ///
    /// A maximum below two would make back/forward navigation useless, so
    /// smaller values are raised to the floor.
    pub fn effective_max_locations(&self) -> usize {
        self.max_locations.max(MIN_MAX_LOCATIONS)
    }

    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/edittrail/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("edittrail");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't
    /// be read or parsed.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        Self::load_from(&config_path)
    }

    /// Loads configuration from a specific file, defaulting on any failure.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|_| Self::default()),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, toml_string)?;

        Ok(())
    }
}
