mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{inspect, merge, resolve, InspectArgs, MergeArgs, ResolveArgs};
use config::Config;
use tracing_subscriber::EnvFilter;

/// Variantkit CLI - resolve variant style configs from the command line
#[derive(Parser, Debug)]
#[command(name = "variantkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Only drop exact duplicate classes instead of resolving conflicts
    #[arg(long, global = true)]
    no_merge: bool,

    /// Reject unknown slots, defaults and props
    #[arg(long, global = true)]
    strict: bool,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a component's classes for a set of props
    Resolve(ResolveArgs),

    /// Show the variants, defaults and slots of components
    Inspect(InspectArgs),

    /// Collapse conflicting utility classes
    Merge(MergeArgs),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let mut config = Config::load(&cwd)?;
    if cli.no_merge {
        config.tv.tw_merge = false;
    }
    if cli.strict {
        config.tv.strict = true;
    }

    match cli.command {
        Command::Resolve(args) => resolve(args, &config, &cwd),
        Command::Inspect(args) => inspect(args, &config, &cwd),
        Command::Merge(args) => merge(args, &config),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
