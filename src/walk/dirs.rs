//! Directory walker

use crate::condition::Condition;
use crate::error::{Error, Result};
use crate::normalize::join_unix;

use super::frame::{Frame, clean_start, open_frame};
use super::options::WalkDirOptions;

/// Start a lazy walk yielding directory paths under `options.dir`.
///
/// Traversal is depth-first and pre-order: a directory is yielded before
/// its children are visited. Entries arrive in whatever order the OS
/// listing provides — pass the results through
/// [`path_sort`](crate::path_sort) (or use
/// [`get_dir_list`](crate::get_dir_list)) when a deterministic order
/// matters.
///
/// An `exclude_dir` match prunes the whole subtree; an `include_dir`
/// condition suppresses non-matching names from the output but descent
/// continues through them.
///
/// # Example
///
/// ```no_run
/// use pathwalk::{WalkDirOptions, walk_dir};
///
/// for dir in walk_dir(WalkDirOptions { dir: "src".into(), ..Default::default() }) {
///     println!("{}", dir?);
/// }
/// # Ok::<(), pathwalk::Error>(())
/// ```
pub fn walk_dir(options: WalkDirOptions) -> DirWalk {
    DirWalk {
        exclude_dir: options.exclude_dir,
        include_dir: options.include_dir,
        walk: options.walk,
        pending: Some(clean_start(&options.dir)),
        stack: Vec::new(),
        done: false,
    }
}

/// Lazy directory traversal; see [`walk_dir`].
///
/// Single-pass and non-restartable: after the first `Err` item the iterator
/// is fused. Dropping it mid-walk releases every open directory handle.
pub struct DirWalk {
    exclude_dir: Option<Condition>,
    include_dir: Option<Condition>,
    walk: bool,
    /// Directory scheduled for descent before the next entry is pulled.
    pending: Option<String>,
    stack: Vec<Frame>,
    done: bool,
}

impl DirWalk {
    fn abort(&mut self, err: Error) -> Option<Result<String>> {
        self.done = true;
        self.pending = None;
        self.stack.clear();
        Some(Err(err))
    }
}

impl Iterator for DirWalk {
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
            if !file_type.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if self.exclude_dir.as_ref().is_some_and(|c| c.matches(&name)) {
                continue;
            }

            let path = join_unix(&frame.dir, &name);
            if self.walk {
                self.pending = Some(path.clone());
            }

            let suppressed = self.include_dir.as_ref().is_some_and(|c| !c.matches(&name));
            if !suppressed {
                return Some(Ok(path));
            }
        }
    }
}
