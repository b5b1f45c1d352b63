//! CLI module for playmix

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::playlist::Separator;

pub mod commands;

#[derive(Parser, Debug)]
#[command(name = "playmix", about = "Build playlists from directories and merge them evenly")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this config file instead of the default one
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create one playlist per directory, named after the directory
    Create {
        /// Directories to list (not recursive)
        #[arg(value_name = "DIR")]
        directories: Vec<PathBuf>,

        /// Keep entries in directory order instead of sorting them
        #[arg(long, conflicts_with = "sort")]
        no_sort: bool,

        /// Sort entries even if the config disables sorting
        #[arg(long, conflicts_with = "no_sort")]
        sort: bool,

        /// Separator between directory and file name
        #[arg(long, value_enum)]
        separator: Option<Separator>,

        /// Directory to write playlists into
        #[arg(long, value_name = "DIR", default_value = ".")]
        output_dir: PathBuf,

        /// Print playlists instead of writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Merge playlists into one, spreading each playlist's songs evenly
    Distribute {
        /// Playlists to merge, e.g. Rock.m3u8
        #[arg(value_name = "PLAYLIST")]
        playlists: Vec<PathBuf>,

        /// Output file (defaults to distributed.m3u8 in the working directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Separator between playlist name and file name
        #[arg(long, value_enum)]
        separator: Option<Separator>,

        /// Print the merged playlist instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
