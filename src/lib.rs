pub mod platform;
pub mod runner;
pub mod walker;

pub use platform::formatter_path;
pub use runner::{run, RunOptions, RunSummary};
pub use walker::find_source_files;

/// Filename patterns the tool formats.
pub const SOURCE_PATTERNS: &[&str] = &["*.cc", "*.h"];

/// Default traversal root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "src";
