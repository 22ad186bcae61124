//! ndk-build adapter.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::builder::errors::BuilderError;
use crate::builder::executor::CommandRunner;
use crate::builder::toolchain::{ensure_exists, key_value, CommandSpec, ToolchainRoot};
use crate::builder::{Builder, BuilderKind};
use crate::util::env::EnvSource;

/// Environment variable naming the Android NDK root.
pub const ANDROID_NDK_ENV: &str = "ANDROID_NDK";

/// ndk-build script name for the host platform.
pub fn ndk_build_name() -> &'static str {
    if cfg!(windows) {
        "ndk-build.cmd"
    } else {
        "ndk-build"
    }
}

/// Builds with the NDK's `ndk-build` script.
pub struct NdkBuilder {
    build_dir: PathBuf,
    ndk_build: PathBuf,
    runner: Arc<dyn CommandRunner>,
}

impl NdkBuilder {
    /// Locate `ndk-build` under the prefix or `$ANDROID_NDK`.
    pub fn new(
        build_dir: impl Into<PathBuf>,
        prefix: Option<&str>,
        env: &dyn EnvSource,
        runner: Arc<dyn CommandRunner>,
    ) -> Result<Self, BuilderError> {
        let root = ToolchainRoot::resolve(prefix, ANDROID_NDK_ENV, env)?;
        let ndk_build = ensure_exists(root.join(&[ndk_build_name()]))?;

        Ok(NdkBuilder {
            build_dir: build_dir.into(),
            ndk_build,
            runner,
        })
    }

    /// Path to the resolved `ndk-build` script.
    pub fn ndk_build(&self) -> &Path {
        &self.ndk_build
    }

    /// The base invocation, before caller options.
    pub fn command(&self) -> CommandSpec {
        CommandSpec::new(&self.ndk_build)
            .arg("V=1")
            .arg(key_value("NDK_OUT=", &self.build_dir))
            .arg(key_value("NDK_LIBS_OUT=", &self.build_dir))
    }
}

impl Builder for NdkBuilder {
    fn kind(&self) -> BuilderKind {
        BuilderKind::Ndk
    }

    fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    fn toolchain_paths(&self) -> Vec<(&'static str, &Path)> {
        vec![("ndk-build", self.ndk_build())]
    }

    fn commands(&self, options: &[String]) -> Vec<CommandSpec> {
        vec![self.command().args(options)]
    }

    fn build(&self, options: &[String]) -> Result<(), BuilderError> {
        tracing::info!("Running ndk-build into {}", self.build_dir.display());
        for cmd in self.commands(options) {
            self.runner.run(&cmd)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixtures::{fake_ndk, touch};
    use crate::test_support::{MockExecutor, MockProcessOutput};
    use crate::util::env::MapEnv;
    use tempfile::TempDir;

    #[test]
    fn test_ndk_command_shape() {
        let tmp = TempDir::new().unwrap();
        let ndk = fake_ndk(tmp.path());
        let env = MapEnv::new().with(ANDROID_NDK_ENV, ndk.to_string_lossy());
        let runner = Arc::new(MockExecutor::new());

        let builder = NdkBuilder::new("/tmp/out", None, &env, runner.clone()).unwrap();
        builder
            .build(&["NDK_APPLICATION_MK=Application.mk".to_string()])
            .unwrap();

        let script = ndk.join(ndk_build_name());
        assert_eq!(
            runner.calls(),
            vec![vec![
                script.display().to_string(),
                "V=1".to_string(),
                "NDK_OUT=/tmp/out".to_string(),
                "NDK_LIBS_OUT=/tmp/out".to_string(),
                "NDK_APPLICATION_MK=Application.mk".to_string(),
            ]]
        );
    }

    #[test]
    fn test_ndk_prefix_overrides_env() {
        let tmp = TempDir::new().unwrap();
        let script = touch(&tmp.path().join("custom").join(ndk_build_name()));
        let prefix = tmp.path().join("custom").to_string_lossy().into_owned();
        let env = MapEnv::new().with(ANDROID_NDK_ENV, "/nonexistent/ndk");

        let builder =
            NdkBuilder::new("out", Some(&prefix), &env, Arc::new(MockExecutor::new())).unwrap();

        assert_eq!(builder.ndk_build(), script.as_path());
        assert_eq!(builder.toolchain_paths(), vec![("ndk-build", script.as_path())]);
    }

    #[test]
    fn test_ndk_missing_prefix_path() {
        let runner = Arc::new(MockExecutor::new());
        let err = NdkBuilder::new("out", Some("/nonexistent/ndk"), &MapEnv::new(), runner.clone())
            .err()
            .unwrap();

        match err {
            BuilderError::ToolchainNotFound { path } => {
                assert_eq!(path, Path::new("/nonexistent/ndk").join(ndk_build_name()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_ndk_missing_env() {
        let err = NdkBuilder::new("out", None, &MapEnv::new(), Arc::new(MockExecutor::new()))
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "ANDROID_NDK environment variable is not set");
    }

    #[cfg(unix)]
    #[test]
    fn test_ndk_out_keeps_non_utf8_build_dir() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let tmp = TempDir::new().unwrap();
        let ndk = fake_ndk(tmp.path());
        let env = MapEnv::new().with(ANDROID_NDK_ENV, ndk.to_string_lossy());
        let out = PathBuf::from(OsStr::from_bytes(b"/tmp/out\xff"));

        let builder = NdkBuilder::new(&out, None, &env, Arc::new(MockExecutor::new())).unwrap();
        let cmd = builder.command();

        assert_eq!(cmd.args[1].clone().into_vec(), b"NDK_OUT=/tmp/out\xff".to_vec());
        assert_eq!(cmd.args[2].clone().into_vec(), b"NDK_LIBS_OUT=/tmp/out\xff".to_vec());
        assert_eq!(builder.build_dir(), out.as_path());
    }

    #[test]
    fn test_ndk_failure_propagates() {
        let tmp = TempDir::new().unwrap();
        let ndk = fake_ndk(tmp.path());
        let env = MapEnv::new().with(ANDROID_NDK_ENV, ndk.to_string_lossy());
        let runner = Arc::new(MockExecutor::new());
        runner.expect_contains("ndk-build", MockProcessOutput::failure(2, "Android.mk not found"));

        let builder = NdkBuilder::new("out", None, &env, runner.clone()).unwrap();
        let err = builder.build(&[]).unwrap_err();

        assert!(matches!(err, BuilderError::CommandFailed { code: Some(2), .. }));
        assert!(err.to_string().contains("Android.mk not found"));
    }
}
