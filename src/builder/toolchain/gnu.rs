//! Clang and GCC through the Ninja generator.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::builder::errors::BuilderError;
use crate::builder::BuilderKind;
use crate::util::env::EnvSource;

use super::{ensure_exists, exe_name, key_value, CMakeToolchain, ToolchainRoot};

/// Compiler family driven with explicit C/C++ compiler paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilerFamily {
    /// Clang/LLVM
    Clang,
    /// GCC (GNU Compiler Collection)
    Gcc,
}

impl CompilerFamily {
    /// Environment variable naming the installation root.
    pub fn env_var(&self) -> &'static str {
        match self {
            CompilerFamily::Clang => "LLVM",
            CompilerFamily::Gcc => "GCC",
        }
    }

    /// C and C++ driver names for the host platform.
    pub fn driver_names(&self) -> (String, String) {
        match self {
            CompilerFamily::Clang => (exe_name("clang"), exe_name("clang++")),
            // The GCC layout has never carried an .exe suffix.
            CompilerFamily::Gcc => ("gcc".to_string(), "g++".to_string()),
        }
    }
}

/// A Clang or GCC installation.
#[derive(Debug, Clone)]
pub struct GnuToolchain {
    pub family: CompilerFamily,
    /// Path to the C compiler
    pub cc: PathBuf,
    /// Path to the C++ compiler
    pub cxx: PathBuf,
}

impl GnuToolchain {
    /// Locate the C and C++ drivers.
    ///
    /// The prefix is prepended to the driver name as a plain string, so both
    /// `/opt/llvm/bin/` and `/usr/bin/aarch64-linux-gnu-` work. The
    /// environment root has the drivers in `bin/`.
    pub fn resolve(
        family: CompilerFamily,
        prefix: Option<&str>,
        env: &dyn EnvSource,
    ) -> Result<Self, BuilderError> {
        let (cc_name, cxx_name) = family.driver_names();
        let root = ToolchainRoot::resolve(prefix, family.env_var(), env)?;

        let (cc, cxx) = match &root {
            ToolchainRoot::Prefix(prefix) => (
                PathBuf::from(format!("{}{}", prefix, cc_name)),
                PathBuf::from(format!("{}{}", prefix, cxx_name)),
            ),
            ToolchainRoot::Env(_) => (
                root.join(&["bin", cc_name.as_str()]),
                root.join(&["bin", cxx_name.as_str()]),
            ),
        };

        let cc = ensure_exists(cc)?;
        let cxx = ensure_exists(cxx)?;

        Ok(GnuToolchain { family, cc, cxx })
    }
}

impl CMakeToolchain for GnuToolchain {
    fn kind(&self) -> BuilderKind {
        match self.family {
            CompilerFamily::Clang => BuilderKind::CMakeClang,
            CompilerFamily::Gcc => BuilderKind::CMakeGcc,
        }
    }

    fn configure_args(&self) -> Vec<OsString> {
        vec![
            "-G".into(),
            "Ninja".into(),
            key_value("-DCMAKE_C_COMPILER:FILEPATH=", &self.cc),
            key_value("-DCMAKE_CXX_COMPILER:FILEPATH=", &self.cxx),
        ]
    }

    fn resolved_paths(&self) -> Vec<(&'static str, &Path)> {
        vec![("cc", self.cc.as_path()), ("cxx", self.cxx.as_path())]
    }
}
