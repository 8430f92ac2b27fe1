//! File discovery and layered loading.
//!
//! Sources, lowest priority first:
//!
//! 1. built-in defaults
//! 2. `sortwise.toml`, nested by profile (`[default]`, `[linux]`, `[macos]`, ...)
//! 3. `SORTWISE_*` environment variables (`__` separates nested keys)
//!
//! The profile named after the host OS is selected, so one file can carry a
//! different `base_url` or Chrome path per machine.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::{Figment, Profile};
use tracing::debug;

use crate::config::SuiteConfig;
use crate::error::{ConfigError, Result};
use crate::validation::validate;

pub const CONFIG_FILE: &str = "sortwise.toml";
pub const ENV_PREFIX: &str = "SORTWISE_";

/// Profile for the host OS (`linux`, `macos`, `windows`, ...).
pub fn host_profile() -> Profile {
    Profile::new(std::env::consts::OS)
}

/// Finds and loads `sortwise.toml` under a root directory.
///
/// # Example
///
/// ```no_run
/// use sortwise_config::ConfigDiscovery;
///
/// let config = ConfigDiscovery::new(".").load().unwrap();
/// println!("testing {}", config.base_url);
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
    profile: Profile,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            profile: host_profile(),
        }
    }

    /// Selects a profile other than the host OS.
    pub fn with_profile(mut self, profile: impl AsRef<str>) -> Self {
        self.profile = Profile::new(profile.as_ref());
        self
    }

    /// Returns the config file under the root, if there is one.
    pub fn find(&self) -> Option<PathBuf> {
        let path = self.root.join(CONFIG_FILE);
        path.exists().then_some(path)
    }

    /// Loads and validates configuration.
    ///
    /// A missing `sortwise.toml` is not an error: defaults and environment
    /// variables still apply, and validation reports what is missing.
    pub fn load(&self) -> Result<SuiteConfig> {
        let file = self.find();
        self.extract(file.as_deref())
    }

    /// Loads and validates configuration from an explicit file.
    pub fn load_from(&self, path: &Path) -> Result<SuiteConfig> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        self.extract(Some(path))
    }

    /// The layered figment, before extraction.
    pub fn figment(&self, file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(SuiteConfig::default()));

        if let Some(path) = file {
            figment = figment.merge(Toml::file(path).nested());
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__").global())
            .select(self.profile.clone())
    }

    fn extract(&self, file: Option<&Path>) -> Result<SuiteConfig> {
        debug!(
            file = ?file,
            profile = %self.profile,
            "loading suite configuration"
        );

        let config: SuiteConfig = self.figment(file).extract()?;
        validate(&config)?;
        Ok(config)
    }
}
