//! Environment lookup for toolchain discovery.
//!
//! Builders never call `std::env::var` directly. They receive an
//! [`EnvSource`] so that tests (and config files) can supply toolchain roots
//! without touching the process environment.

use std::collections::HashMap;

/// Source of environment variable values.
pub trait EnvSource: Send + Sync {
    /// Look up a variable. Unset and non-UTF-8 values both yield `None`.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed set of variables.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        MapEnv {
            vars: HashMap::new(),
        }
    }

    /// Add a variable.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl From<HashMap<String, String>> for MapEnv {
    fn from(vars: HashMap<String, String>) -> Self {
        MapEnv { vars }
    }
}

/// Two sources consulted in order: `overrides` first, then `fallback`.
///
/// An empty override counts as unset, so it never hides the fallback.
#[derive(Debug, Clone)]
pub struct LayeredEnv<A, B> {
    overrides: A,
    fallback: B,
}

impl<A, B> LayeredEnv<A, B> {
    pub fn new(overrides: A, fallback: B) -> Self {
        LayeredEnv {
            overrides,
            fallback,
        }
    }
}

impl<A: EnvSource, B: EnvSource> EnvSource for LayeredEnv<A, B> {
    fn var(&self, key: &str) -> Option<String> {
        self.overrides
            .var(key)
            .filter(|v| !v.is_empty())
            .or_else(|| self.fallback.var(key))
    }
}
