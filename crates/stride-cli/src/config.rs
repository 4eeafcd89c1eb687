//! Configuration file loading.
//!
//! The configuration is a JSON document. It is read from `--config` when
//! given, otherwise from `$XDG_CONFIG_HOME/stride/config.json` when that file
//! exists. Every field is optional.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};
use stride_core::{models::UserContext, Result, StrideError};

const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: Option<String>,
    pub default_user_id: Option<String>,
    pub user_context: Option<ContextConfig>,
    pub collaborator: Option<CollaboratorConfig>,
}

/// Overrides for the user's working preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContextConfig {
    pub working_hours_per_week: Option<u32>,
    pub preferred_working_days: Option<Vec<String>>,
    pub timezone: Option<String>,
}

/// External program consulted before the local engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollaboratorConfig {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Per-stage limit in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Loads the configuration.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::FileSystem` if an explicit path cannot be read,
    /// `StrideError::Serialization` if the file is not valid configuration
    /// JSON, and `StrideError::Configuration` if a value is out of range.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => {
                    debug!("No configuration file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(&path).map_err(|e| StrideError::FileSystem {
            path: path.clone(),
            source: e,
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the existing configuration file under the XDG config
    /// directories, if any.
    fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("stride").find_config_file("config.json")
    }

    fn validate(&self) -> Result<()> {
        if let Some(collaborator) = &self.collaborator {
            if collaborator.command.trim().is_empty() {
                return Err(StrideError::Configuration {
                    message: "collaborator command must not be empty".to_string(),
                });
            }
            if collaborator.timeout_secs == 0 {
                return Err(StrideError::Configuration {
                    message: "collaborator timeout_secs must be positive".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Working preferences for `user_id`, with configured overrides applied.
    pub fn user_context(&self, user_id: &str) -> Option<UserContext> {
        let overrides = self.user_context.as_ref()?;
        let mut context = UserContext::for_user(user_id);

        if let Some(hours) = overrides.working_hours_per_week {
            context.working_hours_per_week = hours;
        }
        if let Some(days) = &overrides.preferred_working_days {
            context.preferred_working_days = days.clone();
        }
        if let Some(timezone) = &overrides.timezone {
            context.timezone = timezone.clone();
        }

        Some(context)
    }
}
