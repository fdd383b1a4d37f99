//! Canonical forward-slash path form

use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::error::{Error, Result};

/// Convert a path string to canonical forward-slash form.
///
/// Every backslash becomes a forward slash, and any run of two or more
/// slashes is collapsed to one — except a run starting at position 0, which
/// is preserved so network paths (`//server/share`) survive.
///
/// Pure and total; applying it twice gives the same result as applying it
/// once.
///
/// # Example
///
/// ```
/// use pathwalk::to_unix;
///
/// assert_eq!(to_unix(r"a\b//c"), "a/b/c");
/// assert_eq!(to_unix("//server/share"), "//server/share");
/// ```
pub fn to_unix(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut leading = true;
    let mut prev_was_sep = false;

    for ch in path.chars() {
        let sep = ch == '/' || ch == '\\';
        if sep {
            if leading || !prev_was_sep {
                out.push('/');
            }
        } else {
            leading = false;
            out.push(ch);
        }
        prev_was_sep = sep;
    }

    out
}

/// Canonical form of an OS path, converting lossily for non-UTF-8 names.
pub(crate) fn to_unix_lossy(path: &Path) -> String {
    to_unix(&path.to_string_lossy())
}

/// Join a child name onto a canonical directory path. A `.` directory
/// vanishes, so walking the current directory yields `one/file.txt` rather
/// than `./one/file.txt`.
pub(crate) fn join_unix(dir: &str, name: &str) -> String {
    if dir.is_empty() || dir == "." {
        name.to_owned()
    } else if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// Lexically absolutize a path: anchor it against the current directory and
/// fold `.`/`..` components without touching the filesystem (symlinks are
/// not resolved).
pub(crate) fn absolutize(path: &Path) -> Result<PathBuf> {
    let abs = std::path::absolute(path).map_err(|e| Error::io(path, e))?;
    Ok(abs.clean())
}
