//! `nbuild toolchain` command

use anyhow::Result;

use super::{factory, load_current_config, Selection};
use crate::cli::ToolchainArgs;
use native_builder::util::process::find_cmake;

pub fn execute(args: ToolchainArgs) -> Result<()> {
    let config = load_current_config()?;
    let selection = Selection::resolve(&config, args.select, args.options)?;

    // Construction validates the toolchain; nothing runs.
    let builder = factory(&config).create(
        selection.kind,
        &selection.build_dir,
        selection.prefix.as_deref(),
    )?;

    println!("Builder:   {}", builder.kind());
    println!("Build dir: {}", builder.build_dir().display());
    match (&selection.prefix, builder.kind().env_var()) {
        (Some(prefix), _) if !prefix.is_empty() => println!("Prefix:    {}", prefix),
        (_, Some(var)) => println!("From:      ${}", var),
        _ => {}
    }

    for (label, path) in builder.toolchain_paths() {
        println!("  {:<15} {}", label, path.display());
    }

    if builder.kind().is_cmake() {
        match find_cmake() {
            Some(cmake) => println!("CMake:     {}", cmake.display()),
            None => println!("CMake:     not found in PATH"),
        }
    }

    println!();
    println!("Commands:");
    for cmd in builder.commands(&selection.options) {
        println!("  {}", cmd);
    }

    Ok(())
}
