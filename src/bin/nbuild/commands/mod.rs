//! Command implementations

pub mod build;
pub mod clean;
pub mod completions;
pub mod kinds;
pub mod toolchain;

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::SelectArgs;
use native_builder::util::config::{global_config_path, load_config, project_config_path};
use native_builder::util::{Config, LayeredEnv, ProcessEnv};
use native_builder::{BuilderFactory, BuilderKind};

/// Build directory used when neither the command line nor the config names one.
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Load global and project configuration for the current directory.
pub fn load_current_config() -> Result<Config> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let global = global_config_path();
    Ok(load_config(global.as_deref(), &project_config_path(&cwd)))
}

/// A builder selection after merging command-line flags over config.
#[derive(Debug)]
pub struct Selection {
    pub kind: BuilderKind,
    pub build_dir: PathBuf,
    pub prefix: Option<String>,
    /// Config options followed by command-line options
    pub options: Vec<String>,
}

impl Selection {
    pub fn resolve(config: &Config, select: SelectArgs, options: Vec<String>) -> Result<Self> {
        let kind = match select.kind {
            Some(name) => name.parse::<BuilderKind>()?,
            None => config.kind()?.context(
                "no builder kind given\n\
                 \n\
                 Pass --kind, or set `kind` under [build] in .nbuild/config.toml.\n\
                 Run `nbuild kinds` to list the available kinds.",
            )?,
        };

        let build_dir = select
            .build_dir
            .or_else(|| config.build.build_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_DIR));

        let prefix = select.prefix.or_else(|| config.build.prefix.clone());

        let mut all_options = config.build.options.clone();
        all_options.extend(options);

        Ok(Selection {
            kind,
            build_dir,
            prefix,
            options: all_options,
        })
    }
}

/// Factory resolving toolchain roots from the config's `[env]` table first,
/// then the process environment.
pub fn factory(config: &Config) -> BuilderFactory {
    BuilderFactory::new().with_env(LayeredEnv::new(config.env_overrides(), ProcessEnv))
}
