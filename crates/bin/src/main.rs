use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod input;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing on stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("keypath=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from_compact_flag(cli.compact);

    match &cli.command {
        Commands::Unpack(args) => commands::unpack::run(args, format),
        Commands::Flatten(args) => commands::flatten::run(args, format),
    }
}
