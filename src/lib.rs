//! native-builder - a thin wrapper over native build toolchains
//!
//! This crate locates ndk-build, CMake toolchain files and compilers through
//! environment variables or explicit prefixes, assembles the command line for
//! each target platform, and runs it.
//!
//! ```rust,no_run
//! use native_builder::{create, BuilderKind};
//!
//! let builder = create(BuilderKind::CMakeGcc, "build", None)?;
//! builder.build(&["-DCMAKE_BUILD_TYPE=Release".to_string()])?;
//! # Ok::<(), native_builder::BuilderError>(())
//! ```

pub mod builder;
pub mod util;

/// Test utilities and mocks for unit tests.
///
/// This module is only available when compiling with `--cfg test`. It
/// provides a recording command runner and fake toolchain layouts.
#[cfg(test)]
pub mod test_support;

pub use builder::{
    create, Builder, BuilderError, BuilderFactory, BuilderKind, CMakeBuilder, CommandRunner,
    CommandSpec, NdkBuilder, SystemRunner,
};
pub use util::Config;
