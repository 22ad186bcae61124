//! `nbuild build` command

use anyhow::Result;

use super::{factory, load_current_config, Selection};
use crate::cli::BuildArgs;

pub fn execute(args: BuildArgs) -> Result<()> {
    let config = load_current_config()?;
    let selection = Selection::resolve(&config, args.select, args.options)?;

    let builder = factory(&config).create(
        selection.kind,
        &selection.build_dir,
        selection.prefix.as_deref(),
    )?;

    if args.clean {
        builder.clean();
    }

    builder.build(&selection.options)?;

    eprintln!(
        "    Finished `{}` -> {}",
        selection.kind,
        selection.build_dir.display()
    );

    Ok(())
}
