//! Directory scanning
//!
//! Lists the regular files sitting directly in a directory. Subdirectories
//! are never descended into.

use std::fs;
use std::io;
use std::path::Path;

/// List the names of regular files directly inside `dir`, sorted by name.
///
/// Symlinks are followed when deciding whether an entry is a file. Entries
/// whose metadata cannot be read are skipped, and so are names that are not
/// valid UTF-8, since they could not be joined back to the real path. An empty directory yields an
/// empty list.
///
/// # Errors
///
/// Returns an `io::Error` if `dir` itself cannot be read.
pub fn list_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("Skipping unreadable entry in {}: {e}", dir.display());
                continue;
            }
        };

        match fs::metadata(entry.path()) {
            Ok(meta) if meta.is_file() => match entry.file_name().into_string() {
                Ok(name) => files.push(name),
                Err(raw) => {
                    log::warn!("Skipping {}: name is not valid UTF-8", raw.to_string_lossy());
                }
            },
            Ok(_) => {}
            Err(e) => {
                log::debug!("Skipping {}: {e}", entry.path().display());
            }
        }
    }

    files.sort();
    log::debug!("Found {} file(s) in {}", files.len(), dir.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::create_test_file;
    use tempfile::TempDir;

    #[test]
    fn test_lists_only_regular_files() {
        let dir = TempDir::new().unwrap();
        create_test_file(dir.path().join("b.tar.gz")).unwrap();
        create_test_file(dir.path().join("a.txt")).unwrap();
        fs::create_dir(dir.path().join("subdir")).unwrap();
        create_test_file(dir.path().join("subdir").join("nested.tar.gz")).unwrap();

        let files = list_files(dir.path()).unwrap();
        assert_eq!(files, vec!["a.txt", "b.tar.gz"]);
    }

    #[test]
    fn test_hidden_files_are_listed() {
        let dir = TempDir::new().unwrap();
        create_test_file(dir.path().join(".hidden.tar.gz")).unwrap();

        let files = list_files(dir.path()).unwrap();
        assert_eq!(files, vec![".hidden.tar.gz"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        create_test_file(dir.path().join(OsStr::from_bytes(b"backup-\xff.tar.gz"))).unwrap();
        create_test_file(dir.path().join("backup.tar.gz")).unwrap();

        let files = list_files(dir.path()).unwrap();
        assert_eq!(files, vec!["backup.tar.gz"]);
        for name in &files {
            assert!(dir.path().join(name).is_file());
        }
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(list_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(list_files(&dir.path().join("does-not-exist")).is_err());
    }
}
