//! Option records for the tree walkers

use std::path::PathBuf;

use crate::condition::Condition;

/// Options for [`walk_dir`](crate::walk_dir).
#[derive(Debug, Clone)]
pub struct WalkDirOptions {
    /// Directory to start walking; default is the current directory.
    pub dir: PathBuf,
    /// Directory names to skip entirely (no yield, no descent).
    pub exclude_dir: Option<Condition>,
    /// When set, only matching directory names are yielded; descent is
    /// unaffected.
    pub include_dir: Option<Condition>,
    /// When false, only direct children of `dir` are visited.
    pub walk: bool,
}

impl Default for WalkDirOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            exclude_dir: None,
            include_dir: None,
            walk: true,
        }
    }
}

/// Options for [`walk_files`](crate::walk_files).
#[derive(Debug, Clone)]
pub struct WalkFilesOptions {
    /// Directory to start walking; default is the current directory.
    pub dir: PathBuf,
    /// Directory names whose subtrees are not descended into.
    pub exclude_dir: Option<Condition>,
    /// File names to suppress.
    pub exclude_file: Option<Condition>,
    /// When set, a file is yielded only if its immediate parent directory's
    /// base name matches.
    pub include_dir: Option<Condition>,
    /// When set, only matching file names are yielded.
    pub include_file: Option<Condition>,
    /// When false, only direct children of `dir` are visited.
    pub walk: bool,
}

impl Default for WalkFilesOptions {
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
