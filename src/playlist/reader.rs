//! Playlist parsing

use std::path::Path;
use tracing::debug;

use super::escape;
use super::Separator;
use crate::error::{Error, Result};

/// Parse playlist text into songs prefixed with `identifier`
///
/// Comment lines (starting with `#`) are ignored. Every other line is reduced
/// to its final path component, accepting either `/` or `\` as separator in
/// the input, and re-joined to `identifier` with `separator`. Lines that do
/// not look like a filename are skipped. A leading byte order mark is ignored.
pub fn parse(text: &str, identifier: &str, separator: Separator) -> Vec<String> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    let mut skipped = 0usize;
    let songs: Vec<String> = text
        .lines()
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| {
            let song = filename(line)
                .and_then(escape::decode)
                .map(|name| separator.join(identifier, &name));
            if song.is_none() && !line.trim().is_empty() {
                skipped += 1;
            }
            song
        })
        .collect();

    if skipped > 0 {
        debug!("Skipped {} unmatched line(s) in playlist {}", skipped, identifier);
    }
    songs
}

/// Extract the filename from a playlist line
///
/// A filename needs a non-empty stem before its first dot and something
/// after that dot, e.g. `01 - Intro.mp3`.
fn filename(line: &str) -> Option<&str> {
    let line = line.trim_end_matches(['\r', '\n']);
    let name = line.rsplit(['/', '\\']).next()?;

    match name.find('.') {
        Some(dot) if dot > 0 && dot + 1 < name.len() => Some(name),
        _ => None,
    }
}

/// Derive the identifier used as directory prefix for a playlist file
///
/// `/music/lists/Classics.m3u8` becomes `Classics`.
pub fn identifier_for(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidName {
            path: path.to_path_buf(),
        })
}
