//! Source file discovery

use std::path::{Path, PathBuf};

use anyhow::Result;
use ignore::types::TypesBuilder;
use ignore::WalkBuilder;

use crate::SOURCE_PATTERNS;

/// Find all C++ source files under the given roots, in sorted order.
///
/// A root that is itself a matching file is returned as-is. Directories that
/// cannot be read are logged and skipped, so a missing root simply yields no
/// files.
pub fn find_source_files(paths: &[String]) -> Result<Vec<PathBuf>> {
    let mut file_paths = Vec::new();

    let first_path = paths
        .first()
        .cloned()
        .unwrap_or_else(|| crate::DEFAULT_ROOT.to_string());
    let mut walk_builder = WalkBuilder::new(first_path);

    for path in paths.iter().skip(1) {
        walk_builder.add(path);
    }

    let mut types_builder = TypesBuilder::new();
    for pattern in SOURCE_PATTERNS {
        types_builder.add("cpp", pattern)?;
    }
    types_builder.select("cpp");
    walk_builder.types(types_builder.build()?);

    // The tree under the root is walked unconditionally; neither ignore
    // files nor hidden-entry rules have any say in what gets formatted.
    walk_builder.ignore(false);
    walk_builder.git_ignore(false);
    walk_builder.git_global(false);
    walk_builder.git_exclude(false);
    walk_builder.parents(false);
    walk_builder.hidden(false);
    walk_builder.require_git(false);

    for result in walk_builder.build() {
        match result {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() {
                    file_paths.push(clean_path(path));
                }
            }
            Err(err) => log::warn!("error walking directory: {err}"),
        }
    }

    // Overlapping roots may yield the same file twice
    file_paths.sort();
    file_paths.dedup();

    // Final explicit extension filter, regardless of how the type filter
    // interacted with the walk
    file_paths.retain(|path| path.extension().is_some_and(|ext| ext == "cc" || ext == "h"));

    Ok(file_paths)
}

fn clean_path(path: &Path) -> PathBuf {
    path.strip_prefix("./")
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
