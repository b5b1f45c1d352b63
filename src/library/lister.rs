//! Directory listing for fresh playlists

use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::playlist::Separator;

/// How directory entries are turned into songs
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    /// Sort entries by their full relative path
    pub sort: bool,
    /// Separator between directory name and entry
    pub separator: Separator,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            sort: true,
            separator: Separator::default(),
        }
    }
}

/// Name of the playlist built from `directory`: its base name
///
/// Trailing separators are ignored; `.` and `..` are resolved against the
/// filesystem first.
pub async fn playlist_name(directory: &Path) -> Result<String> {
    if let Some(name) = directory.file_name().and_then(|n| n.to_str()) {
        return Ok(name.to_string());
    }

    let resolved = fs::canonicalize(directory)
        .await
        .map_err(|source| Error::Read {
            path: directory.to_path_buf(),
            source,
        })?;

    resolved
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidName {
            path: directory.to_path_buf(),
        })
}

/// List the entries of `directory` as songs prefixed with its base name
///
/// Not recursive. Subdirectories are listed like files and nothing is checked
/// for being actual media. Entries whose names are not valid UTF-8 are
/// skipped.
pub async fn list(directory: &Path, options: ListOptions) -> Result<Vec<String>> {
    let name = playlist_name(directory).await?;
    let read_error = |source: std::io::Error| Error::Read {
        path: directory.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(directory).await.map_err(read_error)?;
    let mut songs = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(read_error)? {
        match entry.file_name().into_string() {
            Ok(file_name) => songs.push(options.separator.join(&name, &file_name)),
            Err(raw) => warn!("Skipping non UTF-8 entry {:?} in {}", raw, directory.display()),
        }
    }

    if options.sort {
        songs.sort();
    }

    debug!("Listed {} entries in {}", songs.len(), directory.display());
    Ok(songs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::tempdir;

    fn seed(dir: &Path, names: &[&str]) {
        for name in names {
            std_fs::write(dir.join(name), b"").unwrap();
        }
    }

    #[tokio::test]
    async fn test_list_sorted() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("Classics");
        std_fs::create_dir(&dir).unwrap();
        seed(&dir, &["b.mp3", "a.mp3", "c [live].mp3"]);

        let songs = list(&dir, ListOptions::default()).await.unwrap();
        assert_eq!(
            songs,
            vec!["Classics/a.mp3", "Classics/b.mp3", "Classics/c [live].mp3"]
        );
    }

    #[tokio::test]
    async fn test_list_includes_subdirectories() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("Mixed");
        std_fs::create_dir_all(dir.join("nested")).unwrap();
        seed(&dir, &["cover.jpg"]);

        let songs = list(&dir, ListOptions::default()).await.unwrap();
        assert_eq!(songs, vec!["Mixed/cover.jpg", "Mixed/nested"]);
    }

    #[tokio::test]
    async fn test_list_unsorted_keeps_all_entries() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("Raw");
        std_fs::create_dir(&dir).unwrap();
        seed(&dir, &["z.mp3", "y.mp3", "x.mp3"]);

        let options = ListOptions {
            sort: false,
            separator: Separator::Backslash,
        };
        let mut songs = list(&dir, options).await.unwrap();
        songs.sort();
        assert_eq!(songs, vec!["Raw\\x.mp3", "Raw\\y.mp3", "Raw\\z.mp3"]);
    }

    #[tokio::test]
    async fn test_list_missing_directory() {
        let tmp = tempdir().unwrap();
        let result = list(&tmp.path().join("missing"), ListOptions::default()).await;
        assert!(matches!(result, Err(Error::Read { .. })));
    }

    #[tokio::test]
    async fn test_playlist_name_trailing_separator() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("Jazz");
        std_fs::create_dir(&dir).unwrap();
        let with_slash = format!("{}/", dir.display());
        assert_eq!(playlist_name(Path::new(&with_slash)).await.unwrap(), "Jazz");
    }

    #[tokio::test]
    async fn test_playlist_name_parent_component() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("Outer");
        std_fs::create_dir_all(dir.join("inner")).unwrap();
        let name = playlist_name(&dir.join("inner").join("..")).await.unwrap();
        assert_eq!(name, "Outer");
    }
}
