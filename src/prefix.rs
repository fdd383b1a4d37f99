//! Common path-prefix computation

use serde_json::Value;

use crate::error::{Error, Result};
use crate::normalize::to_unix;

/// Find the common base path of a collection of paths.
///
/// Returns `None` when called with no paths at all, and `Some("")` when
/// fewer than two paths are supplied. The result carries a trailing `/`
/// after every matched segment, so a non-empty prefix always denotes a
/// directory (`/a/b/`, never `/a/b`).
///
/// Segments are compared byte-for-byte — unlike [`path_sort`], matching here
/// is case-sensitive.
///
/// [`path_sort`]: crate::path_sort
///
/// # Example
///
/// ```
/// use pathwalk::common_path;
///
/// let prefix = common_path(&["/a/b/c/x.js", "/a/b/d/y.js"]);
/// assert_eq!(prefix.as_deref(), Some("/a/b/"));
/// ```
pub fn common_path<S: AsRef<str>>(paths: &[S]) -> Option<String> {
    if paths.is_empty() {
        return None;
    }
    if paths.len() < 2 {
        return Some(String::new());
    }

    let unix: Vec<String> = paths.iter().map(|p| to_unix(p.as_ref())).collect();
    Some(common_of(&unix))
}

/// Find the common base path of a field extracted from each object.
///
/// Each item must be a JSON object; items whose `key` field is missing or
/// not a string are skipped. Returns `None` when `items` is empty, and
/// `Some("")` when fewer than two usable paths remain after skipping.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] naming the offending index when an
/// item is not an object.
pub fn common_mapped_path(key: &str, items: &[Value]) -> Result<Option<String>> {
    for (i, item) in items.iter().enumerate() {
        if !item.is_object() {
            return Err(Error::InvalidArgument(format!(
                "'items[{i}]' is not an object"
            )));
        }
    }

    if items.is_empty() {
        return Ok(None);
    }

    let unix: Vec<String> = items
        .iter()
        .filter_map(|item| item.get(key).and_then(Value::as_str))
        .map(to_unix)
        .collect();

    if unix.len() < 2 {
        return Ok(Some(String::new()));
    }

    Ok(Some(common_of(&unix)))
}

/// Scan segment index `j` across all paths; a segment joins the prefix only
/// while every path agrees on it.
fn common_of(paths: &[String]) -> String {
    let segments: Vec<Vec<&str>> = paths.iter().map(|p| p.split('/').collect()).collect();

    let mut prefix = String::new();

    for j in 0..segments[0].len() {
        let segment = segments[0][j];
        let all_match = segments[1..]
            .iter()
            .all(|other| other.get(j) == Some(&segment));

        if !all_match {
            break;
        }

        prefix.push_str(segment);
        prefix.push('/');
    }

    prefix
}
