//! TLDR - summarize the page you are reading.
//!
//! Main entry point for the TLDR CLI.

mod cli;
mod cmd_page;
mod cmd_settings;
mod page_source;

use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use tldr_config::{
    AppConfig, ConfigLoader, JsonFileStore, LoggingConfig, SettingsRepository, SettingsValidator,
    tldr_dir,
};
use tldr_runtime::{
    ClientOptions, Extension, ExtensionContext, InstallReason, LogNotifier, StaticTab,
};

use cli::{Cli, Commands};

/// Initialize tracing with console and file output.
///
/// Console output goes to stderr so command output on stdout stays clean.
/// Log files are written to the configured directory with daily rotation.
fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(&logging.dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("tldr")
        .filename_suffix("log")
        .max_log_files(14)
        .build(&logging.dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The worker flushes until the guard drops.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

/// Initialize the extension against the configured storage.
///
/// A store without a settings record is treated as a fresh install.
pub(crate) async fn start_extension(
    config: &AppConfig,
    tab: StaticTab,
) -> Result<Extension, Box<dyn Error>> {
    let store = Arc::new(JsonFileStore::new(&config.storage.path));
    let reason = if SettingsRepository::new(store.clone()).exists().await? {
        InstallReason::Startup
    } else {
        InstallReason::Install
    };

    let context = ExtensionContext::new(
        store,
        Arc::new(tab),
        Arc::new(LogNotifier),
        ClientOptions::from_config(config),
    );
    let extension = Extension::initialize(reason, context).await?;
    if extension.should_open_options() {
        info!(
            "Default settings written to {}; run `tldr settings show` to review them",
            config.storage.path.display()
        );
    }
    Ok(extension)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .unwrap_or_else(|| tldr_dir().join("config.toml"));
    let config = ConfigLoader::load_or_default(&config_path)?;

    init_tracing(&config.logging)?;

    let report = SettingsValidator::validate_app(&config);
    for warning in &report.warnings {
        warn!("{}: {}", warning.path, warning.message);
    }
    if let Some(error) = report.errors.first() {
        return Err(format!("Invalid configuration: {}: {}", error.path, error.message).into());
    }

    match cli.command {
        Commands::Extract { page, json } => cmd_page::extract(&config, &page, json).await,
        Commands::Info { page } => cmd_page::info(&config, &page).await,
        Commands::Summarize {
            page,
            selection,
            length,
            style,
        } => cmd_page::summarize(&config, &page, selection, length, style).await,
        Commands::Settings { action } => cmd_settings::handle_settings_command(&config, action).await,
        Commands::Health { backend_url } => cmd_settings::health(&config, backend_url).await,
        Commands::Message { message, page, url } => {
            cmd_page::message(&config, &message, page.as_deref(), url.as_deref()).await
        }
    }
}
