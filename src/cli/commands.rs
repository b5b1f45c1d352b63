//! CLI command handlers

use anyhow::{Context, Result};
use clap_complete::generate;
use colored::Colorize;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Settings;
use crate::error::Error;
use crate::library::{self, ListOptions, PlaylistStorage};
use crate::playlist::{self, Separator};

/// Resolve `--sort` / `--no-sort` into an override of the config value
pub fn sort_override(sort: bool, no_sort: bool) -> Option<bool> {
    match (sort, no_sort) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Handle the `create` command
///
/// All directories are listed before anything is written, so a missing
/// directory leaves no playlists behind. Without directories nothing is
/// touched, not even the config file.
pub async fn create(
    config: Option<&Path>,
    directories: Vec<PathBuf>,
    sort: Option<bool>,
    separator: Option<Separator>,
    output_dir: PathBuf,
    dry_run: bool,
) -> Result<()> {
    if directories.is_empty() {
        return Err(Error::Usage.into());
    }

    let settings = Settings::load(config).await?;
    let options = ListOptions {
        sort: sort.unwrap_or(settings.sort_entries),
        separator: separator.unwrap_or(settings.separator),
    };

    let mut playlists = Vec::with_capacity(directories.len());
    for directory in &directories {
        let name = library::playlist_name(directory).await?;
        let songs = library::list(directory, options)
            .await
            .with_context(|| format!("Failed to list {}", directory.display()))?;
        playlists.push((settings.playlist_file(&name), songs));
    }

    if dry_run {
        for (file_name, songs) in &playlists {
            println!("{}", format!("# {}", file_name).cyan());
            println!("{}", library::render(songs));
        }
        return Ok(());
    }

    let storage = PlaylistStorage::new(output_dir);
    for (file_name, songs) in &playlists {
        let path = storage.write_playlist(file_name, songs).await?;
        info!("Created {} with {} entries", path.display(), songs.len());
        println!("{} {} ({} entries)", "Created".green(), path.display(), songs.len());
    }

    Ok(())
}

/// Handle the `distribute` command
pub async fn distribute(
    config: Option<&Path>,
    playlists: Vec<PathBuf>,
    output: Option<PathBuf>,
    separator: Option<Separator>,
    dry_run: bool,
) -> Result<()> {
    if playlists.is_empty() {
        return Err(Error::Usage.into());
    }

    let settings = Settings::load(config).await?;
    let separator = separator.unwrap_or(settings.separator);
    let storage = PlaylistStorage::new(PathBuf::from("."));

    let mut sources = Vec::with_capacity(playlists.len());
    for path in &playlists {
        let songs = storage.read_playlist(path, separator).await?;
        info!("Loaded {} songs from {}", songs.len(), path.display());
        sources.push(songs);
    }

    let merged = playlist::distribute(sources);

    if dry_run {
        println!("{}", library::render(&merged));
        return Ok(());
    }

    let output = output.unwrap_or_else(|| PathBuf::from(settings.merged_file()));
    let path = storage.write_playlist(&output, &merged).await?;

    info!("Distributed {} songs into {}", merged.len(), path.display());
    println!(
        "{} {} songs from {} playlist(s) into {}",
        "Distributed".green().bold(),
        merged.len(),
        playlists.len(),
        path.display()
    );

    Ok(())
}

/// Handle the `completion` command
pub fn completion(shell: clap_complete::Shell) {
    let mut cmd = super::Cli::command();
    generate(shell, &mut cmd, "playmix", &mut io::stdout());
}

// Extension trait for Cli to get clap Command
impl super::Cli {
    fn command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }
}
