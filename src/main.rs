//! Nudge CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nudge::cli::{
    app::{load_merged_config, run_notify, run_status, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, SourceOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use nudge::domain::config::AppConfig;
use nudge::domain::notification::Category;
use nudge::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let presenter = Presenter::new();

    let page_url = match cli.page_url.as_deref().map(url::Url::parse).transpose() {
        Ok(url) => url,
        Err(e) => {
            presenter.error(&format!("Invalid page URL: {}", e));
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };
    let source = SourceOptions {
        source_active: cli.source_active,
        page: cli.page.clone(),
        page_url,
    };

    // Build CLI config from args
    let cli_config = AppConfig {
        backend: cli.backend.map(|b| b.as_str().to_string()),
        dialog: cli.dialog.map(|d| d.as_str().to_string()),
        use_alert_fallback: cli.no_alert_fallback.then_some(false),
        alert_sound: cli
            .sound
            .as_ref()
            .map(|p| p.to_string_lossy().to_string()),
        ..Default::default()
    };

    let (category, args) = match cli.command {
        Commands::Config { action } => {
            let result = match XdgConfigStore::new() {
                Ok(store) => handle_config_command(action, &store, &presenter).await,
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Commands::Status { request } => {
            let config = load_merged_config(cli_config).await;
            return run_status(&config, &source, request).await;
        }
        Commands::Notify { category, args } => (category.map(Category::from), args),
        Commands::Success(args) => (Some(Category::Success), args),
        Commands::Error(args) => (Some(Category::Error), args),
        Commands::Info(args) => (Some(Category::Info), args),
        Commands::Warning(args) => (Some(Category::Warning), args),
        Commands::Message(args) => (Some(Category::Message), args),
    };

    let config = load_merged_config(cli_config).await;
    run_notify(&config, &source, category, &args.title, args.to_options()).await
}

/// Log to stderr, filtered by RUST_LOG (default: warnings from this crate)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nudge=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
