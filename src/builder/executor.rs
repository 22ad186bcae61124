//! Command execution for builders.
//!
//! Every command a builder issues goes through a [`CommandRunner`]. The
//! default [`SystemRunner`] spawns a real child process; tests substitute a
//! recording runner so no toolchain has to be installed.

use crate::builder::errors::BuilderError;
use crate::builder::toolchain::CommandSpec;
use crate::util::process::ProcessBuilder;

/// Captured output of a successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Executes commands on behalf of a builder.
pub trait CommandRunner: Send + Sync {
    /// Run `cmd` to completion.
    ///
    /// Returns `BuilderError::CommandFailed` on a non-zero exit and
    /// `BuilderError::Spawn` if the program could not be launched.
    fn run(&self, cmd: &CommandSpec) -> Result<CommandOutput, BuilderError>;
}

/// Runs commands as child processes of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, cmd: &CommandSpec) -> Result<CommandOutput, BuilderError> {
        let command = cmd.display();
        tracing::debug!("Running `{}`", command);

        let output = ProcessBuilder::new(&cmd.program)
            .args(&cmd.args)
            .exec().map_err(|source| BuilderError::Spawn {
            command: command.clone(),
            source,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(BuilderError::CommandFailed {
                command,
                code: output.status.code(),
                stderr,
            });
        }

        for line in stdout.lines() {
            tracing::info!("{}", line);
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_stdout() {
        let cmd = CommandSpec::new("sh").args(["-c", "echo configured"]);
        let output = SystemRunner.run(&cmd).unwrap();

        assert_eq!(output.stdout.trim(), "configured");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_reports_failure() {
        let cmd = CommandSpec::new("sh").args(["-c", "echo 'toolchain error' >&2; exit 1"]);
        let err = SystemRunner.run(&cmd).unwrap_err();

        match err {
            BuilderError::CommandFailed {
                command,
                code,
                stderr,
            } => {
                assert!(command.starts_with("sh -c"));
                assert_eq!(code, Some(1));
                assert!(stderr.contains("toolchain error"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_passes_non_utf8_args_through() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join(OsStr::from_bytes(b"out\xff"));
        let cmd = CommandSpec::new("sh").args([
            OsStr::new("-c"),
            OsStr::new("mkdir \"$1\""),
            OsStr::new("sh"),
            dir.as_os_str(),
        ]);

        SystemRunner.run(&cmd).unwrap();

        assert!(dir.is_dir());
    }

    #[test]
    fn test_system_runner_reports_spawn_failure() {
        let cmd = CommandSpec::new("/nonexistent/ndk-build").arg("V=1");
        let err = SystemRunner.run(&cmd).unwrap_err();

        assert!(matches!(err, BuilderError::Spawn { .. }));
        assert!(err.to_string().contains("/nonexistent/ndk-build V=1"));
    }
}
