//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use clap_complete::Shell;

/// Interactive setup for a project's functions config store.
///
/// Without flags, runs the full session: pick an environment, pick a
/// service, enter its variables, optionally save a local snapshot.
#[derive(Parser, Debug)]
#[command(name = "fbenv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Print tool commands instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Project directory (default: cwd)
    #[arg(short = 'C', long, value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    /// Print effective settings as TOML and exit
    #[arg(long, conflicts_with_all = ["config_template", "generator"])]
    pub show_config: bool,

    /// Print a commented settings template and exit
    #[arg(long, conflicts_with = "generator")]
    pub config_template: bool,

    /// Print shell completions and exit
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,
}
