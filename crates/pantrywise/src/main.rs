//! `PantryWise` - household inventory and medicine reminders
//!
//! Prints a daily digest computed by `pantrywise-core` from a snapshot file,
//! or from built-in sample data when no file is given.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod config;
mod digest;
mod fixtures;

use std::path::PathBuf;

use chrono::Local;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use digest::Digest;

const USAGE: &str = "usage: pantrywise [--write-default-settings] [SNAPSHOT.json]";

/// Parsed command line.
#[derive(Debug, Default)]
struct Args {
    write_default_settings: bool,
    snapshot: Option<PathBuf>,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut parsed = Self::default();
        for arg in args {
            match arg.as_str() {
                "--write-default-settings" => parsed.write_default_settings = true,
                "-h" | "--help" => anyhow::bail!(USAGE),
                flag if flag.starts_with('-') => anyhow::bail!("unknown flag {flag}\n{USAGE}"),
                path if parsed.snapshot.is_none() => parsed.snapshot = Some(PathBuf::from(path)),
                extra => anyhow::bail!("unexpected argument {extra}\n{USAGE}"),
            }
        }
        Ok(parsed)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pantrywise=info,pantrywise_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    let config_dir = config::config_dir();

    if args.write_default_settings {
        let defaults = pantrywise_core::Settings::default();
        let path = config::save_settings(&config_dir, &defaults).await?;
        info!(path = %path.display(), "Wrote default settings");
    }

    let settings = config::load_settings(&config_dir).await?;
    let now = Local::now().naive_local();

    let snapshot = match &args.snapshot {
        Some(path) => {
            info!(path = %path.display(), "Loading snapshot");
            config::load_snapshot(path).await?
        }
        None => {
            info!("No snapshot given, using sample data");
            fixtures::sample_snapshot(now.date())
        }
    };

    print!("{}", Digest::build(&snapshot, &settings, now));
    Ok(())
}
