//! Terminal front end for the task manager
//!
//! Navigate between the home screen, the task list and the task form
//! exactly as the paths `/`, `/tasks`, `/tasks/new` and `/tasks/edit/:id`.

mod command;
mod shell;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tm_core::app::App;
use tm_core::config::{ServiceConfig, API_URL_ENV};
use tm_core::task::HttpTaskService;

use crate::shell::Prompt;

/// Task-list manager for a remote todo API
#[derive(Parser, Debug)]
#[command(name = "task-manager")]
#[command(version)]
struct Cli {
    /// Path to open first
    #[arg(default_value = "/")]
    path: String,

    /// Todo collection endpoint
    #[arg(long, env = API_URL_ENV)]
    api_url: Option<String>,

    /// Answer yes to every confirmation
    #[arg(short, long, default_value_t = false)]
    yes: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is for rendered views
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "task_manager=info,tm_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match cli.api_url {
        Some(url) => ServiceConfig::new(url),
        None => ServiceConfig::from_env(),
    }
    .context("Invalid API URL")?;

    tracing::info!("Using task API at {}", config.base_url);

    let service = Arc::new(HttpTaskService::new(config));
    let mut app = App::new(service);
    app.navigate(&cli.path).await;

    let mut prompt = Prompt::stdin(cli.yes);
    shell::run(&mut app, &mut prompt).await
}
