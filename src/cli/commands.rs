use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "create-links",
    about = "Creates or removes the links of a deployment folder"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log every link operation
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Deployment folder holding deploy-metadata.json (defaults to the executable's folder)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<std::path::PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Remove stale links, then create every link in the manifest
    Create,

    /// Remove every link in the manifest
    Remove,
}
