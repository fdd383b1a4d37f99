//! Deterministic lexical path sorting

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::normalize::to_unix;

/// Sort paths with the `/` separator, dropping exact duplicates.
///
/// Paths are canonicalized, split into segments, and ordered segment by
/// segment with case-insensitive comparison. A path that runs out of
/// segments first sorts first, so a directory always precedes its contents.
///
/// # Example
///
/// ```
/// use pathwalk::path_sort;
///
/// let sorted = path_sort(&["B.txt", "a.txt"]);
/// assert_eq!(sorted, vec!["a.txt", "B.txt"]);
/// ```
pub fn path_sort<S: AsRef<str>>(paths: &[S]) -> Vec<String> {
    sort_segments(paths, "/")
}

/// Sort paths split on an explicit separator.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `sep` is empty.
pub fn path_sort_with<S: AsRef<str>>(paths: &[S], sep: &str) -> Result<Vec<String>> {
    if sep.is_empty() {
        return Err(Error::InvalidArgument("'sep' is empty".into()));
    }
    Ok(sort_segments(paths, sep))
}

fn sort_segments<S: AsRef<str>>(paths: &[S], sep: &str) -> Vec<String> {
    let mut segmented: Vec<Vec<String>> = paths
        .iter()
        .map(|p| {
            to_unix(p.as_ref())
                .split(sep)
                .map(str::to_owned)
                .collect()
        })
        .collect();

    segmented.sort_by(|a, b| compare_segments(a, b));

    let mut sorted: Vec<String> = segmented.iter().map(|segs| segs.join(sep)).collect();
    sorted.dedup();
    sorted
}

/// Segment-wise comparison; a missing segment sorts before any present one.
fn compare_segments(a: &[String], b: &[String]) -> Ordering {
    let length = a.len().max(b.len());

    for i in 0..length {
        match (a.get(i), b.get(i)) {
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = x.to_uppercase().cmp(&y.to_uppercase());
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (None, None) => return Ordering::Equal,
        }
    }

    Ordering::Equal
}
