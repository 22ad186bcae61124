//! CMake adapter: configure, then build.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::builder::errors::BuilderError;
use crate::builder::executor::CommandRunner;
use crate::builder::toolchain::{CMakeToolchain, CommandSpec};
use crate::builder::{Builder, BuilderKind};

/// CMake program. Resolved through PATH when the command runs.
pub const CMAKE: &str = "cmake";

/// CMake build with a toolchain-specific configure step.
///
/// Every `build` call configures and then builds; nothing is cached between
/// calls.
pub struct CMakeBuilder<T> {
    build_dir: PathBuf,
    toolchain: T,
    configure: CommandSpec,
    build: CommandSpec,
    runner: Arc<dyn CommandRunner>,
}

impl<T: CMakeToolchain> CMakeBuilder<T> {
    /// Create a builder for an already-resolved toolchain.
    pub fn new(build_dir: impl Into<PathBuf>, toolchain: T, runner: Arc<dyn CommandRunner>) -> Self {
        let build_dir = build_dir.into();

        let configure = CommandSpec::new(CMAKE)
            .arg("-B")
            .arg(&build_dir)
            .args(toolchain.configure_args());
        let build = CommandSpec::new(CMAKE).arg("--build").arg(&build_dir);

        CMakeBuilder {
            build_dir,
            toolchain,
            configure,
            build,
            runner,
        }
    }

    /// The configure step, before caller options.
    pub fn configure_command(&self) -> &CommandSpec {
        &self.configure
    }

    /// The build step. Caller options never reach it.
    pub fn build_command(&self) -> &CommandSpec {
        &self.build
    }
}

impl<T: CMakeToolchain> Builder for CMakeBuilder<T> {
    fn kind(&self) -> BuilderKind {
        self.toolchain.kind()
    }

    fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    fn toolchain_paths(&self) -> Vec<(&'static str, &Path)> {
        self.toolchain.resolved_paths()
    }

    fn commands(&self, options: &[String]) -> Vec<CommandSpec> {
        vec![
            self.configure_command().clone().args(options),
            self.build_command().clone(),
        ]
    }

    fn build(&self, options: &[String]) -> Result<(), BuilderError> {
        let mut commands = self.commands(options).into_iter();

        if let Some(configure) = commands.next() {
            tracing::info!("Configuring CMake project in {}", self.build_dir.display());
            self.runner.run(&configure)?;
        }

        for cmd in commands {
            tracing::info!("Building CMake project in {}", self.build_dir.display());
            self.runner.run(&cmd)?;
        }

        Ok(())
    }
}
