use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ReportError;

/// What a path turned out to be. Anything we cannot stat, or anything that
/// is neither a regular file nor a directory, is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Directory,
    Unknown,
}

/// Classify a path by its filesystem metadata. Follows symlinks, so a link
/// to a directory classifies as `Directory` (and can loop the walker on a
/// self-referential link). Stat failures of any kind map to `Unknown`.
pub fn classify(path: &Path) -> FileKind {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => FileKind::File,
        Ok(meta) if meta.is_dir() => FileKind::Directory,
        _ => FileKind::Unknown,
    }
}

/// Depth-first pre-order listing of every regular file under `dir`.
/// Directories are expanded, never included; `Unknown` entries are skipped
/// silently. Entry order within a directory is whatever `read_dir` yields.
/// A `read_dir` failure anywhere in the tree is fatal.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let entries = fs::read_dir(dir).map_err(|source| ReportError::FilesystemAccess {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ReportError::FilesystemAccess {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        match classify(&path) {
            FileKind::File => files.push(path),
            FileKind::Directory => files.extend(list_files(&path)?),
            FileKind::Unknown => {}
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn touch(path: &Path, content: &str) {
        let mut f = File::create(path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn classify_nonexistent_is_unknown() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(classify(&dir.path().join("missing")), FileKind::Unknown);
    }

    #[test]
    fn classify_file_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.txt"), "hi");
        assert_eq!(classify(&dir.path().join("a.txt")), FileKind::File);
        assert_eq!(classify(dir.path()), FileKind::Directory);
    }

    #[cfg(unix)]
    #[test]
    fn classify_broken_symlink_is_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("dangling");
        std::os::unix::fs::symlink(dir.path().join("missing"), &link).unwrap();
        assert_eq!(classify(&link), FileKind::Unknown);
    }

    #[test]
    fn flat_directory_lists_every_file_once() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.txt"), "");
        touch(&dir.path().join("b.txt"), "");

        let mut files = list_files(dir.path()).unwrap();
        files.sort();
        assert_eq!(files, vec![dir.path().join("a.txt"), dir.path().join("b.txt")]);
    }

    #[test]
    fn nested_directories_are_expanded_not_listed() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.txt"), "");
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub").join("b.txt"), "");
        touch(&dir.path().join("sub").join("c.txt"), "");

        let files = list_files(dir.path()).unwrap();
        assert_eq!(files.len(), 3);
        assert!(files.contains(&dir.path().join("a.txt")));
        assert!(files.contains(&dir.path().join("sub").join("b.txt")));
        assert!(files.contains(&dir.path().join("sub").join("c.txt")));
        assert!(!files.contains(&dir.path().join("sub")));

        // Depth-first: the two files under sub/ come out adjacent.
        let b = files.iter().position(|p| p.ends_with("b.txt")).unwrap();
        let c = files.iter().position(|p| p.ends_with("c.txt")).unwrap();
        assert_eq!(b.abs_diff(c), 1);
    }

    #[cfg(unix)]
    #[test]
    fn unknown_entries_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.txt"), "");
        std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("dangling"))
            .unwrap();

        let files = list_files(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("a.txt")]);
    }

    #[test]
    fn unreadable_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_files(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, ReportError::FilesystemAccess { .. }));
    }
}
