//! Toolchain discovery for the CMake and ndk-build builders.
//!
//! Every toolchain is located the same way:
//! 1. An explicit, non-empty prefix supplied by the caller
//! 2. The toolchain's environment variable (`ANDROID_NDK`, `MinGW`, `LLVM`,
//!    `GCC`, `OHOS_SDK`)
//!
//! The candidate path is then checked on disk. Both lookups happen when the
//! builder is constructed, never when it builds.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::builder::errors::BuilderError;
use crate::builder::BuilderKind;
use crate::util::env::EnvSource;

mod cross;
mod gnu;
mod mingw;
mod msvc;

pub use cross::{CrossTarget, CrossToolchain};
pub use gnu::{CompilerFamily, GnuToolchain};
pub use mingw::MingwToolchain;
pub use msvc::MsvcToolchain;

/// A command to execute: program and arguments.
///
/// Arguments are kept as `OsString` so paths reach the child byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// The program to run (e.g., "cmake", "/opt/ndk/ndk-build")
    pub program: PathBuf,
    /// Command arguments
    pub args: Vec<OsString>,
}

impl CommandSpec {
    /// Create a new command spec.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        CommandSpec {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add an argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<OsString>>) -> Self {
        self.args.extend(args.into_iter().map(|a| a.into()));
        self
    }

    /// The full command line as display tokens, program first.
    ///
    /// Non-UTF-8 bytes are replaced; use `program` and `args` to run it.
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(self.args.len() + 1);
        tokens.push(self.program.display().to_string());
        tokens.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
        tokens
    }

    /// The command line joined with spaces, for logs and error messages.
    pub fn display(&self) -> String {
        self.tokens().join(" ")
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// `<key><value>` as one argument, e.g. `NDK_OUT=` + a build directory.
pub fn key_value(key: &str, value: impl AsRef<OsStr>) -> OsString {
    let mut arg = OsString::from(key);
    arg.push(value);
    arg
}

/// Toolchain-specific part of a CMake configure step.
pub trait CMakeToolchain: fmt::Debug + Send + Sync {
    /// The builder kind this toolchain backs.
    fn kind(&self) -> BuilderKind;

    /// Arguments appended to `cmake -B <dir>` (generator, compilers, ...).
    fn configure_args(&self) -> Vec<OsString>;

    /// Toolchain files resolved at construction, labelled for display.
    fn resolved_paths(&self) -> Vec<(&'static str, &Path)>;
}

/// Where a toolchain's files are looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolchainRoot {
    /// Caller-supplied prefix, used verbatim.
    Prefix(String),
    /// Value of the toolchain's environment variable.
    Env(PathBuf),
}

impl ToolchainRoot {
    /// Pick the prefix if one was given, otherwise read `var` from `env`.
    ///
    /// Empty prefixes and empty variables count as absent.
    pub fn resolve(
        prefix: Option<&str>,
        var: &str,
        env: &dyn EnvSource,
    ) -> Result<Self, BuilderError> {
        if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
            return Ok(ToolchainRoot::Prefix(prefix.to_string()));
        }

        match env.var(var).filter(|v| !v.is_empty()) {
            Some(root) => Ok(ToolchainRoot::Env(PathBuf::from(root))),
            None => Err(BuilderError::MissingEnv {
                var: var.to_string(),
            }),
        }
    }

    /// Join `layout` below the root, treating a prefix as a directory.
    pub fn join(&self, layout: &[&str]) -> PathBuf {
        let mut path = match self {
            ToolchainRoot::Prefix(prefix) => PathBuf::from(prefix),
            ToolchainRoot::Env(root) => root.clone(),
        };
        path.extend(layout);
        path
    }
}

/// Require `path` to exist.
pub fn ensure_exists(path: PathBuf) -> Result<PathBuf, BuilderError> {
    if path.exists() {
        tracing::debug!("Found toolchain file {}", path.display());
        Ok(path)
    } else {
        Err(BuilderError::ToolchainNotFound { path })
    }
}

/// Platform executable name (`clang` -> `clang.exe` on Windows).
pub fn exe_name(base: &str) -> String {
    if cfg!(windows) {
        format!("{}.exe", base)
    } else {
        base.to_string()
    }
}
