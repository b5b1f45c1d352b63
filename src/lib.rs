//! playmix - Build playlists from directories and merge them evenly

pub mod cli;
pub mod config;
pub mod error;
pub mod library;
pub mod playlist;

pub use error::{Error, Result};
