use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexSet;
use tracing::debug;

use crate::traversal::collect_files;
use crate::types::PresenceDiff;

/// Lists every file under `root` as a path relative to `root`.
///
/// # Errors
/// Returns an error if the tree cannot be walked.
pub fn relative_paths(root: &Path) -> Result<IndexSet<PathBuf>> {
    collect_files(root)?
        .into_iter()
        .map(|path| {
            path.strip_prefix(root)
                .map(Path::to_path_buf)
                .with_context(|| {
                    format!("relativize {} against {}", path.display(), root.display())
                })
        })
        .collect()
}

/// Finds files present on only one side, comparing relative paths.
///
/// # Errors
/// Returns an error if either tree cannot be walked.
pub fn compare_dir_contents(src: &Path, dest: &Path) -> Result<PresenceDiff> {
    let src_files = relative_paths(src)?;
    let dest_files = relative_paths(dest)?;

    let diff = PresenceDiff {
        missing_in_dest: sorted_difference(&src_files, &dest_files),
        missing_in_src: sorted_difference(&dest_files, &src_files),
    };
    debug!(
        missing = diff.missing_in_dest.len(),
        extra = diff.missing_in_src.len(),
        "compared relative paths"
    );
    Ok(diff)
}

fn sorted_difference(a: &IndexSet<PathBuf>, b: &IndexSet<PathBuf>) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = a.difference(b).cloned().collect();
    out.sort();
    out
}
