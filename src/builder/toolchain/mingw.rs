//! MinGW Makefiles generator.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::builder::errors::BuilderError;
use crate::builder::BuilderKind;
use crate::util::env::EnvSource;

use super::{ensure_exists, key_value, CMakeToolchain, ToolchainRoot};

/// Environment variable naming the MinGW installation root.
pub const MINGW_ENV: &str = "MinGW";

const MAKE: &str = "mingw32-make.exe";

/// MinGW with its bundled `mingw32-make`.
#[derive(Debug, Clone)]
pub struct MingwToolchain {
    /// Path to mingw32-make.exe
    pub make: PathBuf,
}

impl MingwToolchain {
    /// Locate `mingw32-make.exe`.
    ///
    /// A prefix points straight at the directory holding the executable;
    /// the `MinGW` variable points at the installation root (`bin/` below it).
    pub fn resolve(prefix: Option<&str>, env: &dyn EnvSource) -> Result<Self, BuilderError> {
        let root = ToolchainRoot::resolve(prefix, MINGW_ENV, env)?;
        let make = match &root {
            ToolchainRoot::Prefix(_) => root.join(&[MAKE]),
            ToolchainRoot::Env(_) => root.join(&["bin", MAKE]),
        };

        Ok(MingwToolchain {
            make: ensure_exists(make)?,
        })
    }
}

impl CMakeToolchain for MingwToolchain {
    fn kind(&self) -> BuilderKind {
        BuilderKind::CMakeWindowsMingw
    }

    fn configure_args(&self) -> Vec<OsString> {
        vec![
            "-G".into(),
            "MinGW Makefiles".into(),
            key_value("-DCMAKE_MAKE_PROGRAM=", &self.make),
        ]
    }

    fn resolved_paths(&self) -> Vec<(&'static str, &Path)> {
        vec![("make", self.make.as_path())]
    }
}
