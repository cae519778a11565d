//! CSAFAP - radio wheel lineup config generator for Counter-Strike 2
//!
//! Saves grenade lineups as aliases bound to radio wheel slots, and keeps the
//! generated config files in sync with the saved lineups.

use clap::{Parser, Subcommand};
use csafap::cli::{
    AddArgs, CliResult, ConfigArgs, DeleteArgs, GenerateArgs, ListArgs, SlotsArgs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CSAFAP - radio wheel lineup config generator for Counter-Strike 2
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a lineup from pasted getpos output
    Add(AddArgs),
    /// Delete a lineup by id
    Delete(DeleteArgs),
    /// List saved lineups
    List(ListArgs),
    /// Show occupied and free radio wheel slots
    Slots(SlotsArgs),
    /// Regenerate all config files from the saved lineups
    Generate(GenerateArgs),
    /// Show or change settings
    Config(ConfigArgs),
}

fn run(command: &Command) -> CliResult<()> {
    match command {
        Command::Add(args) => args.execute(),
        Command::Delete(args) => args.execute(),
        Command::List(args) => args.execute(),
        Command::Slots(args) => args.execute(),
        Command::Generate(args) => args.execute(),
        Command::Config(args) => args.execute(),
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays parseable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(&cli.command) {
        eprintln!("Error: {}", err);
        std::process::exit(err.exit_code());
    }
}
