//! Shared traversal state for the walkers

use std::fs;
use std::path::Path;

use path_clean::PathClean;

use crate::error::{Error, Result};
use crate::normalize::to_unix_lossy;

/// One open directory on the traversal stack: the directory's canonical
/// path and its live listing iterator. Dropping a frame releases the handle.
pub(crate) struct Frame {
    pub dir: String,
    pub entries: fs::ReadDir,
}

/// Open a directory for listing. The failure carries the directory path and
/// aborts the traversal at the caller.
pub(crate) fn open_frame(dir: &str) -> Result<Frame> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    Ok(Frame {
        dir: dir.to_owned(),
        entries,
    })
}

/// Canonical unix form of a starting directory, with `.`/`..` folded so the
/// yielded paths stay clean (`test/fixture/one`, not `./test/fixture/one`).
pub(crate) fn clean_start(dir: &Path) -> String {
    to_unix_lossy(&dir.clean())
}

/// Base name of a canonical directory path.
pub(crate) fn dir_basename(dir: &str) -> &str {
    dir.rsplit('/').next().unwrap_or(dir)
}
