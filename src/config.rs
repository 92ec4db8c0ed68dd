//! Client configuration
//!
//! ## Configuration Sources (in precedence order)
//!
//! 1. `--config <path>` - explicit file, must exist
//! 2. `.enroll/config.yml` - project-level config
//! 3. `<config dir>/enroll/config.yml` - global config
//! 4. Built-in defaults
//!
//! `--base-url` on the command line overrides whatever the file says.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{EnrollError, Result};

pub const DEFAULT_BASE_URL: &str = "https://codebuddy.review";
const PROJECT_CONFIG: &str = ".enroll/config.yml";
const CONFIG_FILE_NAME: &str = "config.yml";
const LOG_FILE_NAME: &str = "enroll.log";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme and host of the review endpoints
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_submit_path")]
    pub submit_path: String,

    #[serde(default = "default_posts_path")]
    pub posts_path: String,

    /// Request timeout; requests wait indefinitely when unset
    #[serde(default)]
    pub timeout_seconds: Option<u64>,

    /// Where interactive sessions write their logs
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_submit_path() -> String {
    "/submit".to_string()
}

fn default_posts_path() -> String {
    "/posts".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            submit_path: default_submit_path(),
            posts_path: default_posts_path(),
            timeout_seconds: None,
            log_file: None,
        }
    }
}

impl ClientConfig {
    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EnrollError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: ClientConfig = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration using the documented precedence
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("Loading config from {}", path.display());
            return Self::from_file(path);
        }

        let project = PathBuf::from(PROJECT_CONFIG);
        if project.is_file() {
            debug!("Loading project config from {}", project.display());
            return Self::from_file(&project);
        }

        if let Some(global) = global_config_path() {
            if global.is_file() {
                debug!("Loading global config from {}", global.display());
                return Self::from_file(&global);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Apply command-line overrides
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self
    }

    fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(EnrollError::Config(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_seconds == Some(0) {
            return Err(EnrollError::Config(
                "timeout_seconds must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Log file for TUI sessions: explicit setting or the cache directory
    pub fn resolved_log_file(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            project_dirs().map(|dirs| dirs.cache_dir().join(LOG_FILE_NAME))
        })
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "enroll")
}

fn global_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
