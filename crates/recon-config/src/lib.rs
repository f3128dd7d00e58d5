//! # recon-config
//!
//! Layered configuration loading for the reconciliation reporter using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RECON_*` prefix, `__` as separator)
//! 2. Project-level `.recon/config.toml`
//! 3. User-level `~/.config/recon/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied on top by the binary.
//!
//! # Environment Variable Mapping
//!
//! `RECON_SOURCE__BASE_URL` -> `source.base_url`,
//! `RECON_REPORT__SAMPLE_SIZE` -> `report.sample_size`.
//!
//! # Usage
//!
//! ```no_run
//! use recon_config::ReconConfig;
//!
//! let config = ReconConfig::load_with_dotenv().expect("config");
//! config.source.validate().expect("valid source");
//! println!("API: {}", config.source.base_url);
//! ```

mod error;
mod report;
mod source;

pub use error::ConfigError;
pub use report::ReportConfig;
pub use source::SourceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReconConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl ReconConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env`
    /// support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be read or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// A missing `.env` is not an error.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".recon/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("RECON_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("recon").join("config.toml"))
    }
}
