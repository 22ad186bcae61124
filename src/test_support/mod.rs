//! Test utilities and mocks for unit tests.
//!
//! [`MockExecutor`] stands in for the real process runner: it records every
//! command a builder issues and answers with canned output, so builders can
//! be exercised without any toolchain installed.
//!
//! # Example
//!
//! ```rust,ignore
//! use native_builder::test_support::{MockExecutor, MockProcessOutput};
//!
//! #[test]
//! fn test_example() {
//!     let exec = Arc::new(MockExecutor::new());
//!     exec.expect_prefix("cmake --build", MockProcessOutput::failure(1, "ninja: error"));
//!
//!     // Hand `exec.clone()` to a builder, then inspect `exec.calls()`.
//! }
//! ```

pub mod fixtures;

use std::ffi::OsString;
use std::sync::Mutex;

use crate::builder::executor::{CommandOutput, CommandRunner};
use crate::builder::toolchain::CommandSpec;
use crate::builder::BuilderError;

/// Arguments as display strings, for comparing against literals.
pub fn lossy(args: &[OsString]) -> Vec<String> {
    args.iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

/// Mock process output for testing command execution.
#[derive(Debug, Clone)]
pub struct MockProcessOutput {
    /// Exit status code (0 = success).
    pub status: i32,
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
}

impl MockProcessOutput {
    /// Create a successful output with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        MockProcessOutput {
            status: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Create a failure output with the given stderr and status code.
    pub fn failure(status: i32, stderr: impl Into<String>) -> Self {
        MockProcessOutput {
            status,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

impl Default for MockProcessOutput {
    fn default() -> Self {
        MockProcessOutput::success("")
    }
}

/// Pattern for matching commands in MockExecutor.
#[derive(Debug, Clone)]
pub enum CommandPattern {
    /// Exact match on full command string.
    Exact(String),
    /// Match if command starts with prefix.
    StartsWith(String),
    /// Match if command contains substring.
    Contains(String),
}

impl CommandPattern {
    /// Check if this pattern matches the given command.
    pub fn matches(&self, cmd: &str) -> bool {
        match self {
            CommandPattern::Exact(s) => cmd == s,
            CommandPattern::StartsWith(s) => cmd.starts_with(s),
            CommandPattern::Contains(s) => cmd.contains(s),
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    expectations: Vec<(CommandPattern, MockProcessOutput)>,
    calls: Vec<Vec<String>>,
}

/// Recording command runner.
///
/// Commands matching no expectation succeed with empty output. Calls are
/// recorded as display tokens.
#[derive(Debug, Default)]
pub struct MockExecutor {
    state: Mutex<MockState>,
}

impl MockExecutor {
    /// Create a new mock executor.
    pub fn new() -> Self {
        MockExecutor::default()
    }

    fn push(&self, pattern: CommandPattern, output: MockProcessOutput) -> &Self {
        self.state
            .lock()
            .unwrap()
            .expectations
            .push((pattern, output));
        self
    }

    /// Add an expectation for an exact command match.
    pub fn expect(&self, cmd: &str, output: MockProcessOutput) -> &Self {
        self.push(CommandPattern::Exact(cmd.to_string()), output)
    }

    /// Add an expectation for a command starting with a prefix.
    pub fn expect_prefix(&self, prefix: &str, output: MockProcessOutput) -> &Self {
        self.push(CommandPattern::StartsWith(prefix.to_string()), output)
    }

    /// Add an expectation for a command containing a substring.
    pub fn expect_contains(&self, substring: &str, output: MockProcessOutput) -> &Self {
        self.push(CommandPattern::Contains(substring.to_string()), output)
    }

    /// Every command run so far, as token lists.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Clear all recorded calls.
    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }
}

impl CommandRunner for MockExecutor {
    fn run(&self, cmd: &CommandSpec) -> Result<CommandOutput, BuilderError> {
        let command = cmd.display();
        let mut state = self.state.lock().unwrap();
        state.calls.push(cmd.tokens());

        let output = state
            .expectations
            .iter()
            .find(|(pattern, _)| pattern.matches(&command))
            .map(|(_, output)| output.clone())
            .unwrap_or_default();

        if output.status != 0 {
            return Err(BuilderError::CommandFailed {
                command,
                code: Some(output.status),
                stderr: output.stderr,
            });
        }

        Ok(CommandOutput {
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_executor_records_calls() {
        let exec = MockExecutor::new();
        exec.run(&CommandSpec::new("cmake").args(["--build", "out"]))
            .unwrap();

        assert_eq!(exec.calls(), vec![vec!["cmake", "--build", "out"]]);
    }

    #[test]
    fn test_mock_executor_expectations() {
        let exec = MockExecutor::new();
        exec.expect("cmake --version", MockProcessOutput::success("cmake version 3.28.1"))
            .expect_prefix("ninja", MockProcessOutput::failure(1, "ninja: error"));

        let out = exec.run(&CommandSpec::new("cmake").arg("--version")).unwrap();
        assert_eq!(out.stdout, "cmake version 3.28.1");

        let err = exec.run(&CommandSpec::new("ninja")).unwrap_err();
        assert!(err.to_string().contains("ninja: error"));
        assert_eq!(exec.calls().len(), 2);
    }
}
