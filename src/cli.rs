use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "repo-list")]
#[command(about = "Renders a GitHub user's repositories, most recently updated first, as an HTML list")]
#[command(version)]
pub struct Cli {
    /// GitHub account whose repositories are listed
    #[arg(long, env = "GITHUB_USERNAME", default_value = "TreexHD")]
    pub username: String,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = repo_list::github::API_BASE_URL)]
    pub api_url: String,

    /// Class of the list element the entries are appended to
    #[arg(long, env = "REPO_LIST_CLASS", default_value = repo_list::page::DEFAULT_CONTAINER_CLASS)]
    pub container_class: String,

    /// Page title and heading
    #[arg(long, env = "PAGE_TITLE", default_value = "Repositories")]
    pub title: String,

    /// Write the page here instead of stdout
    #[arg(short, long, env = "REPO_LIST_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Serve the page over HTTP instead of rendering once
    #[arg(long)]
    pub serve: bool,

    /// Address to listen on with --serve
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
    pub bind: String,
}
