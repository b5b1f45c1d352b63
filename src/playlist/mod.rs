//! Playlist parsing, serialization and merging

pub mod distribute;
pub mod escape;
mod reader;
mod writer;

use serde::{Deserialize, Serialize};

pub use distribute::distribute;
pub use reader::{identifier_for, parse};
pub use writer::serialize;

/// Path separator emitted in playlist entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    #[default]
    Slash,
    Backslash,
}

impl Separator {
    /// The separator character itself
    pub fn as_char(self) -> char {
        match self {
            Separator::Slash => '/',
            Separator::Backslash => '\\',
        }
    }

    /// Join a directory prefix and a filename into one entry
    pub fn join(self, directory: &str, name: &str) -> String {
        format!("{}{}{}", directory, self.as_char(), name)
    }
}
