use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    // Initialize tracing on stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("astrosubs=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format;

    let result = match &cli.command {
        Commands::Print(args) => commands::header::print(args, format),
        Commands::Find(args) => commands::header::find(args, format),
        Commands::Set(args) => commands::header::set(args, format),
        Commands::Rm(args) => commands::header::rm(args, format),
        Commands::Mv(args) => commands::header::mv(args, format),
        Commands::Weekday(args) => commands::weekday::run(args, format),
        Commands::Interp(args) => commands::interp::run(args, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "Command failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
