mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::{cmd_run, cmd_status};
use crate::output::OutputFormat;

/// scaffold - Electron + React project skeleton generator
#[derive(Parser)]
#[command(name = "scaffold")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t)]
  output: OutputFormat,

  /// Project root (defaults to $SCAFFOLD_ROOT, then the current directory)
  #[arg(long, global = true)]
  root: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Create missing template files and merge scripts into package.json (default)
  Run,

  /// Show what run would do without writing anything
  Status,
}

fn init_tracing(verbose: bool) {
  let default = if verbose { "debug" } else { "error" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  init_tracing(cli.verbose);

  let root = cli.root.as_deref();

  match cli.command.unwrap_or(Commands::Run) {
    Commands::Run => cmd_run(root, cli.verbose, cli.output),
    Commands::Status => cmd_status(root, cli.output),
  }
}
