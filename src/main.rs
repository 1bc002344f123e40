use clap::Parser;
use expense_tracker::args::{Args, Command};
use expense_tracker::{commands, Config, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let config = Config::load(args.common().data_file().path()).await?;
    debug!("Using expenses file '{}'", config.data_file().display());

    // Route to appropriate command handler
    let _: () = match args.command() {
        Command::List(list_args) => commands::list(config, list_args.clone()).await?.print(),
        Command::Add(expense_args) => commands::add(config, expense_args.clone()).await?.print(),
        Command::Edit(edit_args) => commands::edit(config, edit_args.clone()).await?.print(),
        Command::Delete(delete_args) => {
            commands::delete(config, delete_args.clone()).await?.print()
        }
        Command::Summary(summary_args) => {
            commands::summary(config, summary_args.clone()).await?.print()
        }
        Command::Chart(chart_args) => commands::chart(config, chart_args.clone()).await?.print(),
    };
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_CRATE_NAME"),
                level,
                "expense_tracker",
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
