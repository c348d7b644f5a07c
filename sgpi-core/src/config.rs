//! Global sgpi configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{SgpiError, SgpiResult};

static DEFAULT_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycbw-_TLEQ-trht5jI2klTi4GJCL-cYJtbVfRfjkNjqlPTJzd43UXqfSemFGpDKGjsNyKbQ/exec";

static DEFAULT_SITE_URL: &str = "http://localhost:5173/";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_site_url() -> String {
    DEFAULT_SITE_URL.to_string()
}

/// Configuration at ~/.config/sgpi/config.toml, overridable with `SGPI_*`
/// environment variables (e.g. `SGPI_ENDPOINT`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SgpiConfig {
    /// Remote catalog endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Base URL that shareable view links are built on.
    #[serde(default = "default_site_url")]
    pub site_url: String,
}

impl Default for SgpiConfig {
    fn default() -> Self {
        SgpiConfig {
            endpoint: default_endpoint(),
            site_url: default_site_url(),
        }
    }
}

impl SgpiConfig {
    pub fn config_path() -> SgpiResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SgpiError::Config("Could not determine config directory".into()))?
            .join("sgpi");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default path. A missing file yields the defaults.
    pub fn load() -> SgpiResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> SgpiResult<Self> {
        let config: SgpiConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("SGPI"))
            .build()
            .map_err(|e| SgpiError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| SgpiError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn site_url(&self) -> SgpiResult<url::Url> {
        Ok(url::Url::parse(&self.site_url)?)
    }

    fn validate(&self) -> SgpiResult<()> {
        url::Url::parse(&self.endpoint)
            .map_err(|e| SgpiError::Config(format!("Invalid endpoint '{}': {e}", self.endpoint)))?;
        url::Url::parse(&self.site_url)
            .map_err(|e| SgpiError::Config(format!("Invalid site_url '{}': {e}", self.site_url)))?;
        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> SgpiResult<()> {
        let contents = format!(
            "\
# sgpi configuration

# Remote catalog endpoint (events and member directory):
# endpoint = \"{}\"

# Site that shareable links point at:
# site_url = \"{}\"
",
            DEFAULT_ENDPOINT, DEFAULT_SITE_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> SgpiResult<String> {
        toml::to_string_pretty(self).map_err(|e| SgpiError::Serialization(e.to_string()))
    }
}
