//! Configuration loading and validation.
//!
//! Values are layered, later sources overriding earlier ones:
//!
//! 1. built-in defaults,
//! 2. a TOML file (an explicit path, else `foodsafe/config.toml` in the
//!    platform configuration directory, if it exists),
//! 3. `FOODSAFE_` environment variables, with `__` separating nested keys
//!    (`FOODSAFE_LISTING__PREFIX=PR`).

pub mod error;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use foodsafe_extract::ListingPattern;
use foodsafe_extract::consts::{DEFAULT_ENCODING, DEFAULT_LISTING_PREFIX, DEFAULT_LISTING_SUFFIX};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ErrorKind, Result};

pub const APPLICATION: &str = "foodsafe";
pub const CONFIG_FILENAME: &str = "config.toml";
pub const ENV_PREFIX: &str = "FOODSAFE_";
pub const DEFAULT_ENDPOINT: &str = "http://info.kingcounty.gov/health/ehs/foodsafety/inspections/Results.aspx";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Inspection results endpoint queried in live mode
    pub endpoint: String,
    /// Timeout for the single request made in live mode
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Declared encoding of saved pages
    pub encoding: String,
    /// Query parameter overrides, applied over the built-in defaults
    pub query: BTreeMap<String, String>,
    pub listing: ListingConfig,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("{APPLICATION}/{}", env!("CARGO_PKG_VERSION")),
            encoding: DEFAULT_ENCODING.to_string(),
            query: BTreeMap::new(),
            listing: ListingConfig::default(),
        }
    }
}

/// The literal text around the digits of a listing identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub prefix: String,
    pub suffix: String,
}
impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_LISTING_PREFIX.to_string(),
            suffix: DEFAULT_LISTING_SUFFIX.to_string(),
        }
    }
}
impl From<&ListingConfig> for ListingPattern {
    fn from(config: &ListingConfig) -> Self {
        ListingPattern::new(&config.prefix, &config.suffix)
    }
}

impl Config {
    /// Loads and validates the layered configuration.
    ///
    /// An explicit `path` must exist; the default location is optional.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) if !path.is_file() => exn::bail!(ErrorKind::NotFound(path.to_path_buf())),
            Some(path) => Some(path.to_path_buf()),
            None => default_path().filter(|path| path.is_file()),
        };
        if let Some(file) = &file {
            tracing::debug!(path = %file.display(), "reading configuration file");
        }
        let config: Self = Self::figment(file.as_deref()).extract().or_raise(|| ErrorKind::Load)?;
        config.validate()?;
        Ok(config)
    }

    fn figment(file: Option<&Path>) -> Figment {
        let figment = Figment::from(Serialized::defaults(Self::default()));
        let figment = match file {
            Some(file) => figment.merge(Toml::file(file)),
            None => figment,
        };
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            exn::bail!(ErrorKind::Invalid("endpoint must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            exn::bail!(ErrorKind::Invalid("timeout_secs must be greater than zero".to_string()));
        }
        if self.encoding.trim().is_empty() {
            exn::bail!(ErrorKind::Invalid("encoding must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn listing_pattern(&self) -> ListingPattern {
        (&self.listing).into()
    }
}

/// `config.toml` inside the platform's configuration directory for foodsafe.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APPLICATION).map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
