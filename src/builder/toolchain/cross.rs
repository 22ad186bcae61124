//! Cross-compilation toolchain files shipped with the Android NDK and the
//! OpenHarmony SDK.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::builder::errors::BuilderError;
use crate::builder::BuilderKind;
use crate::util::env::EnvSource;

use super::{ensure_exists, key_value, CMakeToolchain, ToolchainRoot};

/// Target ABI for both SDKs.
pub const ABI: &str = "arm64-v8a";

/// C++ runtime for both SDKs.
pub const STL: &str = "c++_shared";

/// SDK providing a CMake toolchain file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossTarget {
    Android,
    Ohos,
}

impl CrossTarget {
    /// Environment variable naming the SDK root.
    pub fn env_var(&self) -> &'static str {
        match self {
            CrossTarget::Android => "ANDROID_NDK",
            CrossTarget::Ohos => "OHOS_SDK",
        }
    }

    /// Toolchain file name under `build/cmake/`.
    pub fn toolchain_file_name(&self) -> &'static str {
        match self {
            CrossTarget::Android => "android.toolchain.cmake",
            CrossTarget::Ohos => "ohos.toolchain.cmake",
        }
    }

    /// Value passed as `ANDROID_PLATFORM`.
    pub fn platform(&self) -> &'static str {
        match self {
            CrossTarget::Android => "android-31",
            // The OHOS toolchain file reads the same variable names.
            CrossTarget::Ohos => "OHOS",
        }
    }
}

/// A CMake toolchain file from an SDK.
#[derive(Debug, Clone)]
pub struct CrossToolchain {
    pub target: CrossTarget,
    /// Path to the `*.toolchain.cmake` file
    pub toolchain_file: PathBuf,
}

impl CrossToolchain {
    /// Locate `build/cmake/<target>.toolchain.cmake` under the prefix or
    /// the SDK root.
    pub fn resolve(
        target: CrossTarget,
        prefix: Option<&str>,
        env: &dyn EnvSource,
    ) -> Result<Self, BuilderError> {
        let root = ToolchainRoot::resolve(prefix, target.env_var(), env)?;
        let file = root.join(&["build", "cmake", target.toolchain_file_name()]);

        Ok(CrossToolchain {
            target,
            toolchain_file: ensure_exists(file)?,
        })
    }
}

impl CMakeToolchain for CrossToolchain {
    fn kind(&self) -> BuilderKind {
        match self.target {
            CrossTarget::Android => BuilderKind::CMakeAndroid,
            CrossTarget::Ohos => BuilderKind::CMakeOhos,
        }
    }

    fn configure_args(&self) -> Vec<OsString> {
        vec![
            "-G".into(),
            "Ninja".into(),
            key_value("-DCMAKE_TOOLCHAIN_FILE=", &self.toolchain_file),
            format!("-DANDROID_ABI={}", ABI).into(),
            format!("-DANDROID_STL={}", STL).into(),
            format!("-DANDROID_PLATFORM={}", self.target.platform()).into(),
        ]
    }

    fn resolved_paths(&self) -> Vec<(&'static str, &Path)> {
        vec![("toolchain file", self.toolchain_file.as_path())]
    }
}
