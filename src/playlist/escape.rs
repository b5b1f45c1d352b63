//! Filename escaping for playlist entries
//!
//! The player that consumes these playlists cannot parse square brackets in
//! entries, so they are percent-encoded on write and decoded on read. `%` is
//! part of the reserved set as well, which makes [`decode`] an exact inverse
//! of [`encode`] for every input:
//!
//! ```
//! use playmix::playlist::escape::{decode, encode};
//!
//! let name = "Artist [Live] 100%.flac";
//! assert_eq!(encode(name), "Artist %5BLive%5D 100%25.flac");
//! assert_eq!(decode(&encode(name)).as_deref(), Some(name));
//! ```

use std::borrow::Cow;

/// Percent-encode the reserved characters `%`, `[` and `]`
pub fn encode(name: &str) -> Cow<'_, str> {
    if !name.contains(['%', '[', ']']) {
        return Cow::Borrowed(name);
    }

    let mut encoded = String::with_capacity(name.len() + 8);
    for c in name.chars() {
        match c {
            '%' => encoded.push_str("%25"),
            '[' => encoded.push_str("%5B"),
            ']' => encoded.push_str("%5D"),
            _ => encoded.push(c),
        }
    }
    Cow::Owned(encoded)
}

/// Decode percent-escapes back into the literal filename
///
/// Returns `None` when the escapes decode to invalid UTF-8.
pub fn decode(entry: &str) -> Option<Cow<'_, str>> {
    urlencoding::decode(entry).ok()
}
