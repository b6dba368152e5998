use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod document;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("guidedoc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Check(args) => commands::check::run(args, cli.output),
        Commands::Show(args) => commands::show::run(args, cli.output),
        Commands::Fmt(args) => commands::fmt::run(args, cli.pretty),
        Commands::New(args) => {
            commands::new::run(args, cli.pretty);
            Ok(())
        }
    }
}
