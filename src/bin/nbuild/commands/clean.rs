//! `nbuild clean` command

use std::path::PathBuf;

use anyhow::Result;

use super::{load_current_config, DEFAULT_BUILD_DIR};
use crate::cli::CleanArgs;
use native_builder::util::fs::remove_dir_all_quietly;

/// Cleaning needs no toolchain, so no builder is constructed.
pub fn execute(args: CleanArgs) -> Result<()> {
    let config = load_current_config()?;

    let build_dir = args
        .build_dir
        .or(config.build.build_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_DIR));

    if remove_dir_all_quietly(&build_dir) {
        eprintln!("     Removed {}", build_dir.display());
    }

    Ok(())
}
