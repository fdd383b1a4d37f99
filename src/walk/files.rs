//! File walker

use crate::condition::Condition;
use crate::error::{Error, Result};
use crate::normalize::join_unix;

use super::frame::{Frame, clean_start, dir_basename, open_frame};
use super::options::WalkFilesOptions;

/// Start a lazy walk yielding file paths under `options.dir`.
///
/// Directories are never yielded: an `exclude_dir` match stops descent into
/// that subtree, and when `include_dir` is set a file only surfaces if its
/// immediate parent directory's base name matches. `exclude_file` and
/// `include_file` filter on the file name itself.
///
/// Entry order follows the OS listing; see [`walk_dir`](crate::walk_dir)
/// for the determinism caveat.
///
/// # Example
///
/// ```no_run
/// use pathwalk::{Condition, WalkFilesOptions, walk_files};
///
/// let options = WalkFilesOptions {
///     dir: "src".into(),
///     include_file: Some(Condition::pattern(r"\.rs$")?),
///     ..Default::default()
/// };
/// for file in walk_files(options) {
///     println!("{}", file?);
/// }
/// # Ok::<(), pathwalk::Error>(())
/// ```
pub fn walk_files(options: WalkFilesOptions) -> FileWalk {
    FileWalk {
        exclude_dir: options.exclude_dir,
        exclude_file: options.exclude_file,
        include_dir: options.include_dir,
        include_file: options.include_file,
        walk: options.walk,
        pending: Some(clean_start(&options.dir)),
        stack: Vec::new(),
        done: false,
    }
}

/// Lazy file traversal; see [`walk_files`].
///
/// Single-pass and non-restartable: after the first `Err` item the iterator
/// is fused. Dropping it mid-walk releases every open directory handle.
pub struct FileWalk {
    exclude_dir: Option<Condition>,
    exclude_file: Option<Condition>,
    include_dir: Option<Condition>,
    include_file: Option<Condition>,
    walk: bool,
    pending: Option<String>,
    stack: Vec<Frame>,
    done: bool,
}

impl FileWalk {
    fn abort(&mut self, err: Error) -> Option<Result<String>> {
        self.done = true;
        self.pending = None;
        self.stack.clear();
        Some(Err(err))
    }
}

impl Iterator for FileWalk {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if let Some(dir) = self.pending.take() {
                match open_frame(&dir) {
                    Ok(frame) => self.stack.push(frame),
                    Err(err) => return self.abort(err),
                }
            }

            let frame = self.stack.last_mut()?;

            let entry = match frame.entries.next() {
                None => {
                    self.stack.pop();
                    continue;
                }
                Some(Ok(entry)) => entry,
                Some(Err(e)) => {
                    let dir = frame.dir.clone();
                    return self.abort(Error::io(dir, e));
                }
            };

            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => return self.abort(Error::io(entry.path(), e)),
            };
            let name = entry.file_name().to_string_lossy().into_owned();

            if file_type.is_dir() {
                if self.exclude_dir.as_ref().is_some_and(|c| c.matches(&name)) {
                    continue;
                }
                if self.walk {
                    self.pending = Some(join_unix(&frame.dir, &name));
                }
                continue;
            }

            if !file_type.is_file() {
                continue;
            }

            if let Some(include_dir) = &self.include_dir {
                if !include_dir.matches(dir_basename(&frame.dir)) {
                    continue;
                }
            }
            if self.exclude_file.as_ref().is_some_and(|c| c.matches(&name)) {
                continue;
            }
            if self.include_file.as_ref().is_some_and(|c| !c.matches(&name)) {
                continue;
            }

            return Some(Ok(join_unix(&frame.dir, &name)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_sort;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        for file in ["a/one.txt", "a/two.log", "b/three.txt", "top.txt"] {
            let path = tmp.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "x").unwrap();
        }
        tmp
    }

    fn collect_sorted(walk: FileWalk) -> Vec<String> {
        let paths: Vec<String> = walk.map(|p| p.unwrap()).collect();
        path_sort(&paths)
    }

    #[test]
    fn yields_files_not_directories() {
        let tmp = fixture();

        let files = collect_sorted(walk_files(WalkFilesOptions {
            dir: tmp.path().into(),
            ..Default::default()
        }));

        assert_eq!(files.len(), 4);
        assert!(files.iter().all(|f| f.ends_with(".txt") || f.ends_with(".log")));
    }

    #[test]
    fn walk_false_stays_at_top_level() {
        let tmp = fixture();

        let files = collect_sorted(walk_files(WalkFilesOptions {
            dir: tmp.path().into(),
            walk: false,
            ..Default::default()
        }));

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("/top.txt"));
    }

    #[test]
    fn include_dir_gates_on_parent_name() {
        let tmp = fixture();

        let files = collect_sorted(walk_files(WalkFilesOptions {
            dir: tmp.path().into(),
            include_dir: Some("b".into()),
            ..Default::default()
        }));

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("/b/three.txt"));
    }

    #[test]
    fn file_conditions_filter_names() {
        let tmp = fixture();

        let files = collect_sorted(walk_files(WalkFilesOptions {
            dir: tmp.path().into(),
            exclude_file: Some(Condition::pattern(r"\.log$").unwrap()),
            ..Default::default()
        }));

        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|f| f.ends_with(".txt")));
    }
}
