use anyhow::Result;
use tracing::debug;

use crate::compare::compare_dir_contents;
use crate::formatters::console;
use crate::sizes::find_incomplete_files;

use super::Args;

pub fn run_with_args(args: &Args) -> Result<()> {
    debug!(
        src = %args.orig_dir.display(),
        dest = %args.dest_dir.display(),
        "comparing trees"
    );

    let presence = compare_dir_contents(&args.orig_dir, &args.dest_dir)?;
    println!("{}", console::format_presence(&presence, &args.dest_dir));

    println!();

    let partial = find_incomplete_files(&args.orig_dir, &args.dest_dir)?;
    println!("{}", console::format_partial(&partial));

    debug!(
        missing = presence.missing_in_dest.len(),
        extra = presence.missing_in_src.len(),
        partial = partial.len(),
        "done"
    );
    Ok(())
}
