//! Formatter binary resolution

use std::path::PathBuf;

/// Relative location of the bundled Windows clang-format binary.
pub const WINDOWS_FORMATTER: &str = "build/bin/win/clang-format.exe";

/// Relative location of the bundled clang-format binary for every other
/// platform.
pub const DEFAULT_FORMATTER: &str = "build/bin/mac/clang-format";

/// Resolve the formatter binary for the host platform.
///
/// The path is not checked for existence; a missing binary surfaces later as
/// a failed invocation.
pub fn formatter_path() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(WINDOWS_FORMATTER)
    } else {
        PathBuf::from(DEFAULT_FORMATTER)
    }
}
