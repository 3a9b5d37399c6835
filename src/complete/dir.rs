//! Directory-listing completion.

use crate::error::ShowError;
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Upper bound on the number of names returned by [`expand_dir`].
pub const MAX_DIR_ENTRIES: usize = 128;

/// Names in `dir` whose link-level mode bits intersect `mode_mask`.
///
/// Hidden names (leading `.`) are skipped. Names come in enumeration order
/// and the listing stops after [`MAX_DIR_ENTRIES`] names.
pub fn expand_dir(dir: &Path, mode_mask: u32) -> Result<Vec<String>, ShowError> {
    let mut names = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    for entry in walker {
        let entry = entry.map_err(io::Error::from)?;
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') {
            continue;
        }
        let metadata = entry.metadata().map_err(io::Error::from)?;
        if metadata.mode() & mode_mask == 0 {
            continue;
        }
        names.push(name.into_owned());
        if names.len() >= MAX_DIR_ENTRIES {
            break;
        }
    }

    debug!(dir = %dir.display(), mask = mode_mask, entries = names.len(), "Listed directory");
    Ok(names)
}
