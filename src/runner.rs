//! Formatter invocation

use std::path::{Path, PathBuf};
use std::process::Command;

/// Options controlling a formatting run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunOptions {
    /// Print the commands instead of running them.
    pub dry_run: bool,
    /// Show per-file progress.
    pub verbose: bool,
    /// Suppress progress and dry-run output.
    pub quiet: bool,
}

/// Outcome counters for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Files the formatter was invoked on (or would be, in dry-run mode).
    pub processed: usize,
    /// Invocations that could not be spawned at all.
    pub spawn_failures: usize,
}

/// Format each file in turn with `<binary> -i <file>`.
///
/// Invocations run one at a time, and their exit statuses are deliberately
/// not inspected: a file the formatter rejects is left as it was. A spawn
/// failure (typically a missing binary) is logged, and the run continues
/// with the next file.
pub fn run(binary: &Path, files: &[PathBuf], options: &RunOptions) -> RunSummary {
    let mut summary = RunSummary::default();

    for file in files {
        summary.processed += 1;

        if options.dry_run {
            if !options.quiet {
                println!("{} -i {}", binary.display(), file.display());
            }
            continue;
        }

        if options.verbose && !options.quiet {
            println!("Formatting {}", file.display());
        }

        if let Err(err) = Command::new(binary).arg("-i").arg(file).status() {
            log::warn!(
                "failed to run {} on {}: {err}",
                binary.display(),
                file.display()
            );
            summary.spawn_failures += 1;
        }
    }

    summary
}
