//! Relative-path formatting and sub-path containment

use std::path::Path;

use crate::error::Result;
use crate::normalize::{absolutize, to_unix_lossy};

/// Compute the relative walk from `basepath` to `filepath`, in unix form.
///
/// Both paths are lexically anchored against the current directory first,
/// so relative inputs work: from a base of `.`, `./test.js` comes back as
/// `test.js` and `../test.js` stays `../test.js`.
///
/// # Example
///
/// ```no_run
/// use pathwalk::get_relative_path;
///
/// let rel = get_relative_path("./test/fixture", "./test.js")?;
/// assert_eq!(rel, "../../test.js");
/// # Ok::<(), pathwalk::Error>(())
/// ```
pub fn get_relative_path(
    basepath: impl AsRef<Path>,
    filepath: impl AsRef<Path>,
) -> Result<String> {
    let base = absolutize(basepath.as_ref())?;
    let file = absolutize(filepath.as_ref())?;
    let rel = pathdiff::diff_paths(&file, &base).unwrap_or(file);
    Ok(to_unix_lossy(&rel))
}

/// Report whether `filepath` lies strictly inside `basepath`.
///
/// Containment is decided on lexically absolutized paths, component by
/// component — `/x/yz` is not a sub-path of `/x/y`, and a path is not a
/// sub-path of itself.
pub fn is_subpath(basepath: impl AsRef<Path>, filepath: impl AsRef<Path>) -> Result<bool> {
    let base = absolutize(basepath.as_ref())?;
    let file = absolutize(filepath.as_ref())?;
    Ok(file != base && file.starts_with(&base))
}
