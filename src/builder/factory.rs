//! Builder construction by kind.

use std::path::PathBuf;
use std::sync::Arc;

use crate::builder::cmake::CMakeBuilder;
use crate::builder::errors::BuilderError;
use crate::builder::executor::{CommandRunner, SystemRunner};
use crate::builder::ndk::NdkBuilder;
use crate::builder::toolchain::{
    CompilerFamily, CrossTarget, CrossToolchain, GnuToolchain, MingwToolchain, MsvcToolchain,
};
use crate::builder::{Builder, BuilderKind};
use crate::util::env::{EnvSource, ProcessEnv};

/// Constructs builders, resolving toolchains against an environment source.
pub struct BuilderFactory {
    env: Box<dyn EnvSource>,
    runner: Arc<dyn CommandRunner>,
}

impl BuilderFactory {
    /// A factory reading the process environment and spawning real processes.
    pub fn new() -> Self {
        BuilderFactory {
            env: Box::new(ProcessEnv),
            runner: Arc::new(SystemRunner),
        }
    }

    /// Resolve toolchain roots from `env` instead of the process environment.
    pub fn with_env(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Run commands through `runner`.
    pub fn with_runner(mut self, runner: Arc<dyn CommandRunner>) -> Self {
        self.runner = runner;
        self
    }

    /// Construct the builder for `kind`.
    ///
    /// An empty or absent `prefix` means "use the environment variable". The
    /// MSVC builder ignores the prefix.
    pub fn create(
        &self,
        kind: BuilderKind,
        build_dir: impl Into<PathBuf>,
        prefix: Option<&str>,
    ) -> Result<Box<dyn Builder>, BuilderError> {
        let build_dir = build_dir.into();
        let env = self.env.as_ref();
        let runner = Arc::clone(&self.runner);

        tracing::debug!(
            "Creating {} builder for {}",
            kind,
            build_dir.display()
        );

        let builder: Box<dyn Builder> = match kind {
            BuilderKind::Ndk => Box::new(NdkBuilder::new(build_dir, prefix, env, runner)?),
            BuilderKind::CMakeWindowsVsMsvc => {
                Box::new(CMakeBuilder::new(build_dir, MsvcToolchain::new(), runner))
            }
            BuilderKind::CMakeWindowsMingw => Box::new(CMakeBuilder::new(
                build_dir,
                MingwToolchain::resolve(prefix, env)?,
                runner,
            )),
            BuilderKind::CMakeClang => Box::new(CMakeBuilder::new(
                build_dir,
                GnuToolchain::resolve(CompilerFamily::Clang, prefix, env)?,
                runner,
            )),
            BuilderKind::CMakeGcc => Box::new(CMakeBuilder::new(
                build_dir,
                GnuToolchain::resolve(CompilerFamily::Gcc, prefix, env)?,
                runner,
            )),
            BuilderKind::CMakeAndroid => Box::new(CMakeBuilder::new(
                build_dir,
                CrossToolchain::resolve(CrossTarget::Android, prefix, env)?,
                runner,
            )),
            BuilderKind::CMakeOhos => Box::new(CMakeBuilder::new(
                build_dir,
                CrossToolchain::resolve(CrossTarget::Ohos, prefix, env)?,
                runner,
            )),
        };

        Ok(builder)
    }

    /// Parse `name` as a [`BuilderKind`] and construct it.
    ///
    /// Unknown names fail with `BuilderError::UnknownKind` before any
    /// toolchain lookup.
    pub fn create_named(
        &self,
        name: &str,
        build_dir: impl Into<PathBuf>,
        prefix: Option<&str>,
    ) -> Result<Box<dyn Builder>, BuilderError> {
        let kind: BuilderKind = name.parse()?;
        self.create(kind, build_dir, prefix)
    }
}

impl Default for BuilderFactory {
    fn default() -> Self {
        BuilderFactory::new()
    }
}

/// Construct a builder using the process environment and real processes.
pub fn create(
    kind: BuilderKind,
    build_dir: impl Into<PathBuf>,
    prefix: Option<&str>,
) -> Result<Box<dyn Builder>, BuilderError> {
    BuilderFactory::new().create(kind, build_dir, prefix)
}
