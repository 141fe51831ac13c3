use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use ccfmt::{find_source_files, formatter_path, run, RunOptions};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directories (or files) to scan for C++ sources
    #[arg(required = false, default_value = ccfmt::DEFAULT_ROOT)]
    paths: Vec<String>,

    /// Formatter binary to use instead of the bundled platform one
    #[arg(long, value_name = "PATH")]
    formatter: Option<PathBuf>,

    /// Print the commands that would run without running them
    #[arg(long, default_value = "false")]
    dry_run: bool,

    /// Show per-file progress
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let binary = cli.formatter.clone().unwrap_or_else(formatter_path);

    let files = match find_source_files(&cli.paths) {
        Ok(files) => files,
        Err(e) => {
            eprintln!(
                "{}: failed to scan for source files: {e}",
                "Error".red().bold()
            );
            process::exit(1);
        }
    };
    if files.is_empty() {
        if !cli.quiet {
            println!("No C++ source files found to format.");
        }
        return;
    }

    if cli.verbose && !cli.quiet {
        println!("Using formatter: {}", binary.display());
        println!();
    }

    let start_time = Instant::now();

    let summary = run(
        &binary,
        &files,
        &RunOptions {
            dry_run: cli.dry_run,
            verbose: cli.verbose,
            quiet: cli.quiet,
        },
    );

    let duration_ms = start_time.elapsed().as_millis();

    // Individual formatter results are never inspected, so a completed run
    // always exits 0.
    if cli.quiet {
        return;
    }

    let file_text = if summary.processed == 1 { "file" } else { "files" };

    if cli.dry_run {
        println!(
            "\n{} Would format {} {} ({duration_ms}ms)",
            "Dry run:".yellow().bold(),
            summary.processed,
            file_text
        );
    } else if summary.spawn_failures > 0 {
        println!(
            "\n{} Formatted {} {}, {} could not be run ({duration_ms}ms)",
            "Done:".yellow().bold(),
            summary.processed - summary.spawn_failures,
            file_text,
            summary.spawn_failures
        );
    } else {
        println!(
            "\n{} Formatted {} {} ({duration_ms}ms)",
            "Success:".green().bold(),
            summary.processed,
            file_text
        );
    }
}
