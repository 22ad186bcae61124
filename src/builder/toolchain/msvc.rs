//! Visual Studio (MSVC) generator.

use std::ffi::OsString;
use std::path::Path;

use crate::builder::BuilderKind;

use super::CMakeToolchain;

/// Visual Studio generator name passed to `cmake -G`.
pub const VS_GENERATOR: &str = "Visual Studio 17 2022";

/// MSVC through the Visual Studio generator.
///
/// Nothing is resolved: CMake locates the Visual Studio installation itself.
#[derive(Debug, Clone, Default)]
pub struct MsvcToolchain;

impl MsvcToolchain {
    pub fn new() -> Self {
        MsvcToolchain
    }
}

impl CMakeToolchain for MsvcToolchain {
    fn kind(&self) -> BuilderKind {
        BuilderKind::CMakeWindowsVsMsvc
    }

    fn configure_args(&self) -> Vec<OsString> {
        vec!["-G".into(), VS_GENERATOR.into()]
    }

    fn resolved_paths(&self) -> Vec<(&'static str, &Path)> {
        Vec::new()
    }
}
