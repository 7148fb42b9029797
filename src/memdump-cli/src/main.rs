mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Dump {
            process,
            out,
            read_only,
            max_size,
            warn_per_region,
            strings,
        } => {
            commands::dump::handle(&commands::dump::DumpArgs {
                process: &process,
                out: &out,
                read_only,
                max_size,
                warn_per_region,
                strings,
            })?;
        }

        Commands::Strings { dir, min_len } => {
            commands::strings::handle(&dir, min_len)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
