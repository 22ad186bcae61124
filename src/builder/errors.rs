//! Builder error types.

use std::path::PathBuf;

use thiserror::Error;

/// Error raised while constructing a builder or running its commands.
///
/// Construction errors (`MissingEnv`, `ToolchainNotFound`, `UnknownKind`)
/// surface before any command runs. Execution errors (`CommandFailed`,
/// `Spawn`) come from the command runner during `build`.
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("{var} environment variable is not set")]
    MissingEnv { var: String },

    #[error("{} does not exist", .path.display())]
    ToolchainNotFound { path: PathBuf },

    #[error("invalid builder kind: `{name}`")]
    UnknownKind { name: String },

    #[error("command failed: {command}\n{}", format_failure(.code, .stderr))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("failed to launch: {command}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

fn format_failure(code: &Option<i32>, stderr: &str) -> String {
    let status = match code {
        Some(code) => format!("exit code: {}", code),
        None => "terminated by signal".to_string(),
    };
    if stderr.trim().is_empty() {
        status
    } else {
        format!("{}\nstderr:\n{}", status, stderr.trim_end())
    }
}
