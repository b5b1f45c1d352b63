//! Playlist file operations

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::error::{Error, Result};
use crate::playlist::{self, escape, Separator};

/// Reads playlists from anywhere and writes them into one output directory
pub struct PlaylistStorage {
    root: PathBuf,
}

impl PlaylistStorage {
    /// Create a storage writing into `root`
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the playlist file `file_name` inside the output directory
    ///
    /// An absolute `file_name` is used as is.
    pub fn playlist_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.root.join(file_name)
    }

    /// Read a playlist file into songs prefixed with its identifier
    pub async fn read_playlist(&self, path: &Path, separator: Separator) -> Result<Vec<String>> {
        let identifier = playlist::identifier_for(path)?;

        let text = fs::read_to_string(path).await.map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let songs = playlist::parse(&text, &identifier, separator);
        debug!("Read {} songs from {}", songs.len(), path.display());
        Ok(songs)
    }

    /// Escape and write songs to `file_name` in the output directory
    ///
    /// Returns the full path of the written file.
    pub async fn write_playlist(
        &self,
        file_name: impl AsRef<Path>,
        songs: &[String],
    ) -> Result<PathBuf> {
        let path = self.playlist_path(file_name);

        fs::write(&path, render(songs))
            .await
            .map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;

        debug!("Wrote {} ({} songs)", path.display(), songs.len());
        Ok(path)
    }
}

/// Playlist text for `songs` with reserved characters escaped
pub fn render(songs: &[String]) -> String {
    let escaped: Vec<String> = songs
        .iter()
        .map(|song| escape::encode(song).into_owned())
        .collect();
    playlist::serialize(&escaped)
}
