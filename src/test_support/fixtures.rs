//! Fake toolchain layouts for tests.
//!
//! Each `fake_*` function lays out the files a toolchain root is expected to
//! contain under `root` and returns `root`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::builder::ndk::ndk_build_name;
use crate::builder::toolchain::{exe_name, CrossTarget};

/// Create an empty file (and its parent directories), executable on Unix.
pub fn touch(path: &Path) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "").unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    path.to_path_buf()
}

/// Android NDK: `ndk-build` plus `build/cmake/android.toolchain.cmake`.
pub fn fake_ndk(root: &Path) -> PathBuf {
    touch(&root.join(ndk_build_name()));
    touch(&toolchain_file(root, CrossTarget::Android));
    root.to_path_buf()
}

/// OpenHarmony SDK: `build/cmake/ohos.toolchain.cmake`.
pub fn fake_sdk(root: &Path) -> PathBuf {
    touch(&toolchain_file(root, CrossTarget::Ohos));
    root.to_path_buf()
}

/// MinGW installation: `bin/mingw32-make.exe`.
pub fn fake_mingw(root: &Path) -> PathBuf {
    touch(&root.join("bin").join("mingw32-make.exe"));
    root.to_path_buf()
}

/// LLVM installation: `bin/clang` and `bin/clang++`.
pub fn fake_clang(root: &Path) -> PathBuf {
    touch(&root.join("bin").join(exe_name("clang")));
    touch(&root.join("bin").join(exe_name("clang++")));
    root.to_path_buf()
}

/// GCC installation: `bin/gcc` and `bin/g++`.
pub fn fake_gcc(root: &Path) -> PathBuf {
    touch(&root.join("bin").join("gcc"));
    touch(&root.join("bin").join("g++"));
    root.to_path_buf()
}

fn toolchain_file(root: &Path, target: CrossTarget) -> PathBuf {
    root.join("build")
        .join("cmake")
        .join(target.toolchain_file_name())
}
