use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "verdant",
    version,
    about = "Structural-integrity checks for the plant encyclopedia frontend",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Command>,

    /// Options for the default check run
    #[command(flatten)]
    pub check: CheckArgs,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the registered sections and the artifacts they read
    Sections,
    /// Print the version (same as `--version`)
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Project root that artifact paths are resolved against
    #[arg(long, env = "VERDANT_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Exit with code 1 when any check fails
    #[arg(long)]
    pub strict: bool,
}
