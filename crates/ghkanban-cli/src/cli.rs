use std::path::PathBuf;

use clap::{Parser, Subcommand};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")");

#[derive(Parser)]
#[command(name = "ghkanban")]
#[command(about = "View and move cards on a GitHub project board", long_about = None)]
#[command(version = VERSION)]
pub struct Cli {
    /// Select another repository using the OWNER/REPO format
    #[arg(short = 'R', long, value_name = "OWNER/REPO")]
    pub repo: Option<String>,

    /// Search string for the project name (default: first project)
    #[arg(short = 'S', long, default_value = "")]
    pub search: String,

    /// GitHub token; takes precedence over oauth_token in the config file
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
