//! List and existence aggregators over the tree walkers

use std::path::{Path, PathBuf};

use crate::condition::Condition;
use crate::error::Result;
use crate::normalize::{absolutize, to_unix_lossy};
use crate::sort::path_sort;
use crate::walk::{WalkDirOptions, WalkFilesOptions, walk_dir, walk_files};

/// Options for [`get_dir_list`].
#[derive(Debug, Clone)]
pub struct DirListOptions {
    /// Directory to walk; default is the current directory.
    pub dir: PathBuf,
    /// Directory names to skip entirely.
    pub exclude_dir: Option<Condition>,
    /// When set, only matching directory names are returned.
    pub include_dir: Option<Condition>,
    /// Base to relativize results against; defaults to `dir`.
    pub relative: Option<PathBuf>,
    /// When true, return absolute paths. Takes precedence over `relative`.
    pub resolve: bool,
    /// Sort (and deduplicate) the output; default true.
    pub sort: bool,
    /// When false, only direct children of `dir` are visited.
    pub walk: bool,
}

impl Default for DirListOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            exclude_dir: None,
            include_dir: None,
            relative: None,
            resolve: false,
            sort: true,
            walk: true,
        }
    }
}

/// Options for [`get_file_list`].
#[derive(Debug, Clone)]
pub struct FileListOptions {
    /// Directory to walk; default is the current directory.
    pub dir: PathBuf,
    /// Directory names whose subtrees are not descended into.
    pub exclude_dir: Option<Condition>,
    /// File names to suppress.
    pub exclude_file: Option<Condition>,
    /// When set, a file is returned only if its immediate parent directory's
    /// base name matches.
    pub include_dir: Option<Condition>,
    /// When set, only matching file names are returned.
    pub include_file: Option<Condition>,
    /// Base to relativize results against; defaults to `dir`.
    pub relative: Option<PathBuf>,
    /// When true, return absolute paths. Takes precedence over `relative`.
    pub resolve: bool,
    /// Sort (and deduplicate) the output; default true.
    pub sort: bool,
    /// When false, only direct children of `dir` are visited.
    pub walk: bool,
}

impl Default for FileListOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            exclude_dir: None,
            exclude_file: None,
            include_dir: None,
            include_file: None,
            relative: None,
            resolve: false,
            sort: true,
            walk: true,
        }
    }
}

/// Options for [`has_file`].
#[derive(Debug, Clone)]
pub struct HasFileOptions {
    /// Directory to walk; default is the current directory.
    pub dir: PathBuf,
    /// Directory names whose subtrees are not descended into.
    pub exclude_dir: Option<Condition>,
    /// File names that never count as a match.
    pub exclude_file: Option<Condition>,
    /// When set, only files whose immediate parent directory's base name
    /// matches count.
    pub include_dir: Option<Condition>,
    /// When set, only matching file names count.
    pub include_file: Option<Condition>,
    /// When false, only direct children of `dir` are visited.
    pub walk: bool,
}

impl Default for HasFileOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            exclude_dir: None,
            exclude_file: None,
            include_dir: None,
            include_file: None,
            walk: true,
        }
    }
}

/// Collect every directory path found from walking `options.dir`.
///
/// Paths come back relative to `options.relative` (or to `options.dir` when
/// unset) unless `options.resolve` asks for absolute paths, and pass through
/// [`path_sort`] unless sorting is disabled.
///
/// # Errors
///
/// The first directory that cannot be listed aborts the walk with
/// [`Error::Io`](crate::Error::Io).
pub fn get_dir_list(options: DirListOptions) -> Result<Vec<String>> {
    let DirListOptions {
        dir,
        exclude_dir,
        include_dir,
        relative,
        resolve,
        sort,
        walk,
    } = options;

    let base = relative_base(resolve, relative.as_deref(), &dir)?;
    let walker = walk_dir(WalkDirOptions {
        dir,
        exclude_dir,
        include_dir,
        walk,
    });

    let mut results = Vec::new();
    for path in walker {
        results.push(finish_path(&path?, base.as_deref())?);
    }

    Ok(if sort { path_sort(&results) } else { results })
}

/// Collect every file path found from walking `options.dir`.
///
/// Output handling matches [`get_dir_list`]: relative by default, absolute
/// under `resolve`, sorted unless disabled.
///
/// # Errors
///
/// The first directory that cannot be listed aborts the walk with
/// [`Error::Io`](crate::Error::Io).
pub fn get_file_list(options: FileListOptions) -> Result<Vec<String>> {
    let FileListOptions {
        dir,
        exclude_dir,
        exclude_file,
        include_dir,
        include_file,
        relative,
        resolve,
        sort,
        walk,
    } = options;

    let base = relative_base(resolve, relative.as_deref(), &dir)?;
    let walker = walk_files(WalkFilesOptions {
        dir,
        exclude_dir,
        exclude_file,
        include_dir,
        include_file,
        walk,
    });

    let mut results = Vec::new();
    for path in walker {
        results.push(finish_path(&path?, base.as_deref())?);
    }

    Ok(if sort { path_sort(&results) } else { results })
}

/// Report whether any file under `options.dir` passes the condition tests.
///
/// Returns on the first match without draining the rest of the walk.
///
/// # Errors
///
/// A directory that cannot be listed before a match is found aborts with
/// [`Error::Io`](crate::Error::Io).
pub fn has_file(options: HasFileOptions) -> Result<bool> {
    let HasFileOptions {
        dir,
        exclude_dir,
        exclude_file,
        include_dir,
        include_file,
        walk,
    } = options;

    let mut walker = walk_files(WalkFilesOptions {
        dir,
        exclude_dir,
        exclude_file,
        include_dir,
        include_file,
        walk,
    });

    match walker.next() {
        None => Ok(false),
        Some(Ok(_)) => Ok(true),
        Some(Err(err)) => Err(err),
    }
}

/// Absolutized relativization base, or `None` when `resolve` wins.
fn relative_base(resolve: bool, relative: Option<&Path>, dir: &Path) -> Result<Option<PathBuf>> {
    if resolve {
        return Ok(None);
    }
    Ok(Some(absolutize(relative.unwrap_or(dir))?))
}

fn finish_path(path: &str, base: Option<&Path>) -> Result<String> {
    let abs = absolutize(Path::new(path))?;
    match base {
        None => Ok(to_unix_lossy(&abs)),
        Some(base) => {
            let rel = pathdiff::diff_paths(&abs, base).unwrap_or(abs);
            Ok(to_unix_lossy(&rel))
        }
    }
}
