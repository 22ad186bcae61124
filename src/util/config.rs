//! Configuration file support.
//!
//! Two configuration file locations are read:
//! - Global: `~/.nbuild/config.toml` - User-wide defaults
//! - Project: `.nbuild/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config. Command-line flags
//! take precedence over both.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::builder::BuilderKind;
use crate::util::env::MapEnv;

/// Name of the configuration directory, both global and per project.
pub const CONFIG_DIR: &str = ".nbuild";

/// Configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build settings
    pub build: BuildConfig,

    /// Toolchain root overrides, consulted before the process environment
    /// (e.g. `ANDROID_NDK = "/opt/android-ndk"`)
    pub env: HashMap<String, String>,
}

/// Build-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BuildConfig {
    /// Default builder kind (ndk, cmake-gcc, ...)
    pub kind: Option<String>,

    /// Default build directory
    pub build_dir: Option<PathBuf>,

    /// Default compiler/toolchain prefix
    pub prefix: Option<String>,

    /// Options appended to every build
    pub options: Vec<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.build.kind.is_some() {
            self.build.kind = other.build.kind;
        }
        if other.build.build_dir.is_some() {
            self.build.build_dir = other.build.build_dir;
        }
        if other.build.prefix.is_some() {
            self.build.prefix = other.build.prefix;
        }
        if !other.build.options.is_empty() {
            self.build.options = other.build.options;
        }

        self.env.extend(other.env);
    }

    /// Parse the configured builder kind.
    pub fn kind(&self) -> Result<Option<BuilderKind>> {
        self.build
            .kind
            .as_deref()
            .map(|s| s.parse::<BuilderKind>())
            .transpose()
            .context("invalid `build.kind` in config")
    }

    /// The `[env]` table as an environment source.
    pub fn env_overrides(&self) -> MapEnv {
        MapEnv::from(self.env.clone())
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.nbuild/config.toml)
/// 2. Global config (~/.nbuild/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global) = global_path.filter(|p| p.exists()) {
        config.merge(Config::load_or_default(global));
    }

    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}

/// Get the global config directory (~/.nbuild).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(CONFIG_DIR))
}

/// Get the global config path (~/.nbuild/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.nbuild/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join("config.toml")
}
