mod cli;

use std::sync::Arc;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use ghkanban_api::{GithubClient, ProjectQuery};
use ghkanban_core::{AppConfig, Repository};
use ghkanban_tui::App;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "ghkanban", &mut std::io::stdout());
        return Ok(());
    }

    let repository = match cli.repo.as_deref() {
        Some(slug) => Repository::from_slug(slug)?,
        None => Repository::from_git_remotes()?,
    };

    let config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    let token = config.auth_token(cli.token)?;

    let client = Arc::new(GithubClient::with_endpoints(
        token,
        config.effective_graphql_url(),
        config.effective_rest_url(),
    )?);
    let query = ProjectQuery::new(&repository, cli.search);
    tracing::info!(
        "Starting board for {} (policy {:?})",
        query.slug(),
        config.refresh_policy
    );

    let mut app = App::new(client.clone(), client, query, config.refresh_policy)
        .with_scroll_step(config.effective_detail_scroll_step());
    app.run().await?;
    Ok(())
}

fn init_logging() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("GHKANBAN_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
            )
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
