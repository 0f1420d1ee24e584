mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{build, init, lint, BuildArgs, InitArgs, LintArgs};
use tracing_subscriber::EnvFilter;

/// Halo CLI - Design tokens and component styles for every scoping model
#[derive(Parser, Debug)]
#[command(name = "halo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show debug logs and info-level diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Halo project
    Init(InitArgs),

    /// Compile tokens and component stylesheets into every output pattern
    Build(BuildArgs),

    /// Check tokens and stylesheets without writing anything
    Lint(LintArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::Init(args) => init(args, &cwd),
            Command::Build(args) => build(args, &cwd),
            Command::Lint(args) => lint(args, &cwd, cli.verbose),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
