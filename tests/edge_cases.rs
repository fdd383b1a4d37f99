//! Edge case and error handling tests for pathwalk


use harness::TestTree;
use pathwalk::{
    Condition, DirListOptions, Error, FileListOptions, HasFileOptions, WalkFilesOptions,
    get_dir_list, get_file_list, has_file, walk_files,
};

// ============================================================================
// Error propagation
// ============================================================================

#[test]
fn missing_directory_is_io_error() {
    let tree = TestTree::new();
    let result = get_file_list(FileListOptions {
        dir: tree.path().join("nope"),
        ..Default::default()
    });

    match result {
        Err(Error::Io { path, .. }) => {
            assert!(path.to_string_lossy().ends_with("nope"));
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn file_as_start_directory_is_io_error() {
    let tree = TestTree::new();
    tree.add_file("plain.txt", "x");

    let result = get_dir_list(DirListOptions {
        dir: tree.path().join("plain.txt"),
        ..Default::default()
    });
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn io_error_distinguishable_from_invalid_argument() {
    let io_err = get_file_list(FileListOptions {
        dir: "/nonexistent-pathwalk-edge".into(),
        ..Default::default()
    })
    .unwrap_err();
    let arg_err = Condition::pattern("level-[").unwrap_err();

    assert!(matches!(io_err, Error::Io { .. }));
    assert!(matches!(arg_err, Error::InvalidArgument(_)));
}

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_aborts_the_walk() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let tree = TestTree::new();
    tree.add_file("ok/file.txt", "x");
    let locked = tree.add_dir("locked");
    tree.add_file("locked/secret.txt", "x");

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Running as root bypasses permission bits; nothing to observe then.
    let observable = fs::read_dir(&locked).is_err();
    if observable {
        let result = get_file_list(FileListOptions {
            dir: tree.path().into(),
            ..Default::default()
        });
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    // Restore so the temp dir can be removed.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn walker_fuses_after_error() {
    let mut walker = walk_files(WalkFilesOptions {
        dir: "/nonexistent-pathwalk-edge".into(),
        ..Default::default()
    });

    assert!(matches!(walker.next(), Some(Err(_))));
    assert!(walker.next().is_none());
    assert!(walker.next().is_none());
}

// ============================================================================
// Tree-shape edge cases
// ============================================================================

#[test]
fn empty_directory_yields_nothing() {
    let tree = TestTree::new();

    let dirs = get_dir_list(DirListOptions {
        dir: tree.path().into(),
        ..Default::default()
    })
    .unwrap();
    assert!(dirs.is_empty());

    assert!(
        !has_file(HasFileOptions {
            dir: tree.path().into(),
            ..Default::default()
        })
        .unwrap()
    );
}

#[test]
fn deep_tree_does_not_overflow() {
    let tree = TestTree::new();
    let mut path = String::new();
    for i in 0..200 {
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&format!("d{i}"));
    }
    tree.add_file(&format!("{path}/leaf.txt"), "x");

    let files = get_file_list(FileListOptions {
        dir: tree.path().into(),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("/leaf.txt"));
}

#[test]
fn dotted_directories_walk_unless_excluded() {
    let tree = TestTree::new();
    tree.add_file(".hidden/inside.txt", "x");
    tree.add_file("visible/plain.txt", "x");

    let all = get_file_list(FileListOptions {
        dir: tree.path().into(),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(all, [".hidden/inside.txt", "visible/plain.txt"]);

    let filtered = get_file_list(FileListOptions {
        dir: tree.path().into(),
        exclude_dir: Some(Condition::pattern(r"^\.").unwrap()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(filtered, ["visible/plain.txt"]);
}

#[test]
fn unicode_names_survive() {
    let tree = TestTree::new();
    tree.add_file("über/дата.txt", "x");

    let files = get_file_list(FileListOptions {
        dir: tree.path().into(),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(files, ["über/дата.txt"]);
}

#[cfg(unix)]
#[test]
fn symlinks_are_neither_files_nor_directories() {
    use std::os::unix::fs::symlink;

    let tree = TestTree::new();
    tree.add_file("real/data.txt", "x");
    symlink(tree.path().join("real"), tree.path().join("link")).unwrap();

    let dirs = get_dir_list(DirListOptions {
        dir: tree.path().into(),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(dirs, ["real"]);

    let files = get_file_list(FileListOptions {
        dir: tree.path().into(),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(files, ["real/data.txt"]);
}

// ============================================================================
// Aggregator corner cases
// ============================================================================

#[test]
fn exclude_and_include_compose() {
    let tree = TestTree::new();
    tree.add_file("src/main.rs", "x");
    tree.add_file("src/lib.rs", "x");
    tree.add_file("target/out.rs", "x");
    tree.add_file("docs/guide.md", "x");

    let files = get_file_list(FileListOptions {
        dir: tree.path().into(),
        exclude_dir: Some("target".into()),
        include_file: Some(Condition::pattern(r"\.rs$").unwrap()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(files, ["src/lib.rs", "src/main.rs"]);
}

#[test]
fn relative_base_above_start_dir() {
    let tree = TestTree::new();
    tree.add_file("nest/inner/file.txt", "x");

    let files = get_file_list(FileListOptions {
        dir: tree.path().join("nest"),
        relative: Some(tree.path().into()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(files, ["nest/inner/file.txt"]);
}
