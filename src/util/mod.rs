//! Shared utilities

pub mod config;
pub mod env;
pub mod fs;
pub mod process;

pub use config::Config;
pub use env::{EnvSource, LayeredEnv, MapEnv, ProcessEnv};
