mod cli;

use clap::Parser;
use cli::Cli;
use colored::*;
use repo_list::error::{RepoListError, Result};
use repo_list::github::GitHubClient;
use repo_list::page::Page;
use repo_list::pipeline::{RepoListRenderer, TracingSink};
use repo_list::server::{start_server, AppState};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Logs go to stderr so the rendered page can be piped from stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = GitHubClient::with_base_url(&cli.api_url)?;
    client.user_repos_url(&cli.username)?;
    let renderer = RepoListRenderer::new(client, cli.username.clone());

    if cli.serve {
        eprintln!("{}", "Repository List Server".bold().green());
        eprintln!("{}", "=".repeat(50).dimmed());
        eprintln!("Account: {}", cli.username.cyan());

        let state = AppState {
            renderer: Arc::new(renderer),
            title: cli.title.clone(),
            container_class: cli.container_class.clone(),
        };

        let server = start_server(state, &cli.bind);
        tokio::select! {
            result = server => result?,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\n{}", "Shutting down server...".yellow());
            }
        }
        return Ok(());
    }

    let mut page = Page::new(&cli.title, &cli.container_class);
    let container = page.container_mut().ok_or_else(|| {
        RepoListError::ConfigError(format!(
            "No container with class {:?} in page",
            cli.container_class
        ))
    })?;

    let count = renderer.render_into(container, &mut TracingSink).await;

    let html = page.to_html();
    match &cli.output {
        Some(path) => {
            std::fs::write(path, html)?;
            eprintln!(
                "{} {} repositories to {}",
                "Wrote".green(),
                count,
                path.display()
            );
        }
        None => print!("{}", html),
    }

    Ok(())
}
