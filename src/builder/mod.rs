//! Native toolchain builders.
//!
//! A [`Builder`] wraps one toolchain/platform combination: ndk-build, or
//! CMake with one of several generators and toolchains. Builders resolve
//! their toolchain when constructed and run commands when asked to build.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub mod cmake;
pub mod errors;
pub mod executor;
pub mod factory;
pub mod ndk;
pub mod toolchain;

pub use cmake::CMakeBuilder;
pub use errors::BuilderError;
pub use executor::{CommandOutput, CommandRunner, SystemRunner};
pub use factory::{create, BuilderFactory};
pub use ndk::NdkBuilder;
pub use toolchain::{CMakeToolchain, CommandSpec};

use crate::util::fs::remove_dir_all_quietly;

/// A configured build for one toolchain.
pub trait Builder {
    /// Which variant this is.
    fn kind(&self) -> BuilderKind;

    /// Directory the build writes into.
    fn build_dir(&self) -> &Path;

    /// The commands `build(options)` would run, in order.
    fn commands(&self, options: &[String]) -> Vec<CommandSpec>;

    /// Toolchain files located at construction, labelled for display.
    fn toolchain_paths(&self) -> Vec<(&'static str, &Path)>;

    /// Run the build, appending `options` to the first command.
    ///
    /// Stops at the first failing command.
    fn build(&self, options: &[String]) -> Result<(), BuilderError>;

    /// Remove the build directory. Never fails.
    fn clean(&self) {
        remove_dir_all_quietly(self.build_dir());
    }
}

/// Builder variant selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuilderKind {
    /// ndk-build
    Ndk,
    /// CMake with the Visual Studio 2022 generator
    CMakeWindowsVsMsvc,
    /// CMake with MinGW Makefiles
    CMakeWindowsMingw,
    /// CMake + Ninja with Clang
    CMakeClang,
    /// CMake + Ninja with GCC
    CMakeGcc,
    /// CMake + Ninja with the Android NDK toolchain file
    CMakeAndroid,
    /// CMake + Ninja with the OpenHarmony SDK toolchain file
    CMakeOhos,
}

impl BuilderKind {
    /// Every kind, in declaration order.
    pub const ALL: [BuilderKind; 7] = [
        BuilderKind::Ndk,
        BuilderKind::CMakeWindowsVsMsvc,
        BuilderKind::CMakeWindowsMingw,
        BuilderKind::CMakeClang,
        BuilderKind::CMakeGcc,
        BuilderKind::CMakeAndroid,
        BuilderKind::CMakeOhos,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuilderKind::Ndk => "ndk",
            BuilderKind::CMakeWindowsVsMsvc => "cmake-windows-vs-msvc",
            BuilderKind::CMakeWindowsMingw => "cmake-windows-mingw",
            BuilderKind::CMakeClang => "cmake-clang",
            BuilderKind::CMakeGcc => "cmake-gcc",
            BuilderKind::CMakeAndroid => "cmake-android",
            BuilderKind::CMakeOhos => "cmake-ohos",
        }
    }

    /// Environment variable consulted when no prefix is given.
    pub fn env_var(&self) -> Option<&'static str> {
        match self {
            BuilderKind::Ndk | BuilderKind::CMakeAndroid => Some("ANDROID_NDK"),
            BuilderKind::CMakeWindowsVsMsvc => None,
            BuilderKind::CMakeWindowsMingw => Some("MinGW"),
            BuilderKind::CMakeClang => Some("LLVM"),
            BuilderKind::CMakeGcc => Some("GCC"),
            BuilderKind::CMakeOhos => Some("OHOS_SDK"),
        }
    }

    pub fn is_cmake(&self) -> bool {
        !matches!(self, BuilderKind::Ndk)
    }
}

impl fmt::Display for BuilderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for BuilderKind {
    type Err = BuilderError;

    /// Case-insensitive; `_` and `-` are interchangeable, so `CMAKE_GCC`
    /// and `cmake-gcc` are the same kind.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        BuilderKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| BuilderError::UnknownKind {
                name: s.to_string(),
            })
    }
}
