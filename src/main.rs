mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod store;
mod utils;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use app::CommandContext;
use cli::Cli;
use config::Config;
use error::AppError;
use store::{SqliteStore, default_store_path};
use utils::{Timezone, init_logging, stdin_is_interactive};

fn main() -> ExitCode {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);
    init_logging(cli.debug);
    if let Some(path) = &config.source {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let store_path = match &cli.store {
        Some(path) => path.clone(),
        None => default_store_path()?,
    };
    let mut store = SqliteStore::open(&store_path)?;

    let ctx = CommandContext {
        name: cli.name.as_deref(),
        default_timesheet: cli.default_timesheet.as_deref(),
        now: timezone.now(),
        use_color: cli.use_color(),
        interactive: stdin_is_interactive(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(&cli.command, &mut store, &ctx, &mut out)?;
    out.flush()?;
    Ok(())
}
