//! `nbuild kinds` command

use anyhow::Result;

use native_builder::BuilderKind;

pub fn execute() -> Result<()> {
    for kind in BuilderKind::ALL {
        match kind.env_var() {
            Some(var) => println!("{:<24} ${}", kind, var),
            None => println!("{}", kind),
        }
    }

    Ok(())
}
