//! File-URL to path conversion

use std::path::PathBuf;

use path_clean::PathClean;
use url::Url;

use crate::error::{Error, Result};
use crate::normalize::to_unix_lossy;

/// Convert a `file://` URL into a filesystem path, in unix form.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for an unparsable URL or a non-file
/// scheme.
///
/// # Example
///
/// ```
/// use pathwalk::get_url_filepath;
///
/// let path = get_url_filepath("file:///test/fixture/one/file1.txt")?;
/// assert!(path.ends_with("/test/fixture/one/file1.txt"));
/// # Ok::<(), pathwalk::Error>(())
/// ```
pub fn get_url_filepath(url: &str) -> Result<String> {
    Ok(to_unix_lossy(&url_to_path(url)?))
}

/// Convert a `file://` URL into the path of its directory, optionally
/// resolving further segments against it.
///
/// Each segment is applied in order the way shell resolution works: a
/// relative segment appends (with `..` folded afterwards), an absolute one
/// replaces what came before.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for an unparsable URL or a non-file
/// scheme.
pub fn get_url_dirpath(url: &str, resolve_paths: &[&str]) -> Result<String> {
    let file = url_to_path(url)?;
    let mut dir = file.parent().unwrap_or(&file).to_path_buf();

    for segment in resolve_paths {
        dir.push(segment);
    }

    Ok(to_unix_lossy(&dir.clean()))
}

fn url_to_path(url: &str) -> Result<PathBuf> {
    let parsed =
        Url::parse(url).map_err(|e| Error::InvalidArgument(format!("invalid URL {url:?}: {e}")))?;
    parsed
        .to_file_path()
        .map_err(|()| Error::InvalidArgument(format!("not a file URL: {url:?}")))
}
