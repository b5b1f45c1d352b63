//! Directory listing and playlist file storage

pub mod lister;
pub mod storage;

pub use lister::{list, playlist_name, ListOptions};
pub use storage::{render, PlaylistStorage};
