//! playmix - Build playlists from directories and merge them evenly

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use playmix::cli::{self, Cli, Commands};
use playmix::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "playmix=debug"
    } else {
        "playmix=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(Error::Usage) = err.downcast_ref::<Error>() {
                println!("{}", err);
            } else {
                eprintln!("{} {:#}", "Error:".red().bold(), err);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Create {
            directories,
            no_sort,
            sort,
            separator,
            output_dir,
            dry_run,
        } => {
            let sort = cli::commands::sort_override(sort, no_sort);
            cli::commands::create(config, directories, sort, separator, output_dir, dry_run).await?;
        }
        Commands::Distribute {
            playlists,
            output,
            separator,
            dry_run,
        } => {
            cli::commands::distribute(config, playlists, output, separator, dry_run).await?;
        }
        Commands::Completion { shell } => {
            cli::commands::completion(shell);
        }
    }

    Ok(())
}
