use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use ignore::WalkBuilder;
use tracing::{debug, trace};

/// Recursively lists every regular file under `root`.
///
/// Hidden files are included and no ignore rules apply. Symlinks are not
/// descended into; a link is listed only when it resolves to a regular file.
///
/// # Errors
/// Returns an error if `root` is missing, unreadable or not a directory, or
/// if any entry cannot be read during the walk.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    let md = fs::metadata(root).with_context(|| format!("read directory: {}", root.display()))?;
    if !md.is_dir() {
        bail!("not a directory: {}", root.display());
    }

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.follow_links(false);
    // stable order keeps basename collisions reproducible
    builder.sort_by_file_name(|a, b| a.cmp(b));

    let mut out = Vec::new();
    for dent in builder.build() {
        let dent = dent.with_context(|| format!("walk directory: {}", root.display()))?;
        let path = dent.path();
        if !path.is_file() {
            continue;
        }
        trace!(path = %path.display(), "listed");
        out.push(path.to_path_buf());
    }

    debug!(root = %root.display(), files = out.len(), "walked tree");
    Ok(out)
}
