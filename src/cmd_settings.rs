//! Settings subcommand handlers for TLDR.

use std::error::Error;

use tldr_config::{AppConfig, Settings};
use tldr_runtime::{ConnectionStatus, SaveStatus, StaticTab};

use crate::cli::SettingsAction;
use crate::start_extension;

/// Handle settings subcommands.
pub(crate) async fn handle_settings_command(
    config: &AppConfig,
    action: SettingsAction,
) -> Result<(), Box<dyn Error>> {
    let extension = start_extension(config, StaticTab::empty()).await?;
    let mut options = extension.options_page();
    options.load().await;

    match action {
        SettingsAction::Show => {
            print_settings(options.form());
            Ok(())
        }
        SettingsAction::Set {
            length,
            style,
            backend_url,
            auto_summarize,
            max_text_length,
        } => {
            let form = options.form_mut();
            if let Some(length) = length {
                form.length = length;
            }
            if let Some(style) = style {
                form.style = style;
            }
            if let Some(url) = backend_url {
                form.backend_url = url;
            }
            if let Some(auto) = auto_summarize {
                form.auto_summarize = auto;
            }
            if let Some(max) = max_text_length {
                form.max_text_length = max;
            }

            finish_save(options.save().await, options.last_error())?;
            println!("Settings saved.");
            print_settings(options.form());
            Ok(())
        }
        SettingsAction::Reset => {
            finish_save(options.reset().await, options.last_error())?;
            println!("Settings reset to defaults.");
            print_settings(options.form());
            Ok(())
        }
    }
}

/// Test the backend connection.
pub(crate) async fn health(
    config: &AppConfig,
    backend_url: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let extension = start_extension(config, StaticTab::empty()).await?;
    let mut options = extension.options_page();
    options.load().await;
    if let Some(url) = backend_url {
        options.form_mut().backend_url = url;
    }

    let url = options.form().backend_url.clone();
    let status = options.test_connection().await;
    match status {
        ConnectionStatus::Success => {
            println!("Connected to {}", url);
            Ok(())
        }
        _ => Err(format!(
            "Cannot reach {}: {}",
            url,
            options.last_error().unwrap_or("unknown error")
        )
        .into()),
    }
}

fn finish_save(status: SaveStatus, error: Option<&str>) -> Result<(), Box<dyn Error>> {
    match status {
        SaveStatus::Success => Ok(()),
        _ => Err(format!("Failed to save settings: {}", error.unwrap_or("unknown error")).into()),
    }
}

fn print_settings(settings: &Settings) {
    println!("{:<16} {}", "length", settings.length);
    println!("{:<16} {}", "style", settings.style);
    println!("{:<16} {}", "backendUrl", settings.backend_url);
    println!("{:<16} {}", "autoSummarize", settings.auto_summarize);
    println!("{:<16} {}", "maxTextLength", settings.max_text_length);
}
