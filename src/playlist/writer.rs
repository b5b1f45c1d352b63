//! Playlist serialization

/// Serialize songs into playlist text
///
/// One entry per line, no trailing newline. Entries are written as given;
/// escaping is the caller's job.
pub fn serialize(songs: &[String]) -> String {
    songs.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_empty() {
        assert_eq!(serialize(&[]), "");
    }

    #[test]
    fn test_serialize_songs() {
        let songs = vec![
            "Album/01 - Track One.flac".to_string(),
            "Album/02 - Track Two.flac".to_string(),
        ];
        assert_eq!(
            serialize(&songs),
            "Album/01 - Track One.flac\nAlbum/02 - Track Two.flac"
        );
    }
}
