use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pusher_cli::cli::{menu, Session, Terminal};
use pusher_cli::config::Config;
use pusher_cli::credentials::CredentialsStore;
use pusher_cli::git::Git;

/// The main CLI command line interface.
#[derive(Parser)]
#[command(name = "pusher")]
#[command(version)]
#[command(about = "Stage, commit and push to GitHub from a simple menu")]
#[command(long_about = "Pusher wraps everyday git chores behind a numbered menu:\n\
    storing a GitHub username and token in the OS keychain, pushing\n\
    selected files, creating repositories, writing a README and pushing\n\
    pending changes.\n\n\
    Settings are read from ~/.pusher/config.yaml when present.")]
struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long)]
    verbose: bool,

    /// Read settings from this file instead of ~/.pusher/config.yaml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "pusher_cli=debug"
    } else {
        "pusher_cli=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;
    let credentials = CredentialsStore::keyring(&config.keyring_service);

    let mut session = Session::new(Terminal::stdio(), Git::new(cwd), credentials, config);
    menu::run(&mut session)
}
