use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::traversal::collect_files;
use crate::types::{PartialCopy, SizeMap};

/// Maps each file's base name to its size in bytes.
///
/// Files sharing a base name in different directories collide: the one
/// visited last wins.
///
/// # Errors
/// Returns an error if a file's size cannot be read.
pub fn size_map(files: &[PathBuf]) -> Result<SizeMap> {
    let mut map = SizeMap::with_capacity(files.len());
    for path in files {
        let Some(name) = path.file_name() else {
            continue;
        };
        let size = fs::metadata(path)
            .with_context(|| format!("read size: {}", path.display()))?
            .len();
        match map.insert(name.to_os_string(), size) {
            Some(prev) if prev != size => {
                warn!(
                    path = %path.display(),
                    prev,
                    size,
                    "base name collision with different size, keeping last"
                );
            }
            Some(prev) => {
                debug!(path = %path.display(), prev, size, "base name collision, keeping last");
            }
            None => {}
        }
    }
    Ok(map)
}

/// Finds files, matched by base name, whose destination copy is smaller than the source.
///
/// # Errors
/// Returns an error if either tree cannot be walked or sized.
pub fn find_incomplete_files(src: &Path, dest: &Path) -> Result<Vec<PartialCopy>> {
    let src_sizes = size_map(&collect_files(src)?)?;
    let dest_sizes = size_map(&collect_files(dest)?)?;

    let mut out: Vec<PartialCopy> = src_sizes
        .iter()
        .filter_map(|(name, &source_size)| {
            let &dest_size = dest_sizes.get(name)?;
            (dest_size < source_size).then(|| PartialCopy {
                name: name.clone(),
                source_size,
                dest_size,
            })
        })
        .collect();
    out.sort_by(|a, b| a.name.cmp(&b.name));

    for p in &out {
        debug!(
            name = %p.name.to_string_lossy(),
            missing_bytes = p.missing_bytes(),
            "partially copied"
        );
    }
    Ok(out)
}
