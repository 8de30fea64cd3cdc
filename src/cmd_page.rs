//! Page subcommand handlers for TLDR.

use std::error::Error;

use tldr_config::AppConfig;
use tldr_extract::Extractor;
use tldr_protocols::{SummaryLength, SummaryStyle};
use tldr_runtime::{MenuClick, PopupStatus, SUMMARIZE_MENU_ID, StaticTab};

use crate::cli::PageArgs;
use crate::page_source::load_page;
use crate::start_extension;

/// Print the extracted text, or the full result as JSON.
pub(crate) async fn extract(config: &AppConfig, args: &PageArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let page = load_page(&args.source, args.url.as_deref(), config).await?;
    let result = Extractor::new().extract(&page);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_blank() {
        eprintln!("No text content found on this page");
    } else {
        println!("{}", result.text);
    }
    Ok(())
}

/// Print page metadata.
pub(crate) async fn info(config: &AppConfig, args: &PageArgs) -> Result<(), Box<dyn Error>> {
    let page = load_page(&args.source, args.url.as_deref(), config).await?;
    let info = Extractor::new().page_info(&page);

    println!("Title:        {}", info.title);
    println!("URL:          {}", info.url);
    println!("Hostname:     {}", info.hostname);
    println!("Type:         {}", page.category());
    println!("Words:        {}", info.word_count);
    println!("Main content: {}", if info.has_main_content { "yes" } else { "no" });
    Ok(())
}

/// Summarize a page through the popup, or a selection through the context menu.
pub(crate) async fn summarize(
    config: &AppConfig,
    args: &PageArgs,
    selection: Option<String>,
    length: Option<SummaryLength>,
    style: Option<SummaryStyle>,
) -> Result<(), Box<dyn Error>> {
    let page = load_page(&args.source, args.url.as_deref(), config).await?;
    let extension = start_extension(config, StaticTab::new(page)).await?;

    if let Some(selection) = selection {
        let click = MenuClick::new(SUMMARIZE_MENU_ID).with_selection(selection);
        if let Some(notification) = extension.background().on_context_menu(&click).await {
            println!("{}", notification.title);
            println!("{}", "=".repeat(notification.title.len()));
            println!("{}", notification.message);
        }
        return Ok(());
    }

    let mut popup = extension.popup();
    let opened = popup.open().await.status;
    let overridden = length.is_some() || style.is_some();
    if let Some(length) = length {
        popup.set_length(length);
    }
    if let Some(style) = style {
        popup.set_style(style);
    }

    // With autoSummarize on, opening the popup already produced a summary.
    let status = if opened == PopupStatus::Idle || overridden {
        popup.summarize_page().await.status
    } else {
        opened
    };
    if status != PopupStatus::Success {
        let error = popup.state().error.clone();
        return Err(error.unwrap_or_else(|| "Failed to summarize".to_string()).into());
    }

    let items = popup.summary_items();
    if popup.state().settings.style == SummaryStyle::Bullet {
        for item in items {
            println!("• {}", item);
        }
    } else {
        println!("{}", items.join("\n"));
    }
    Ok(())
}

/// Route one JSON message and print the reply.
pub(crate) async fn message(
    config: &AppConfig,
    message: &str,
    page: Option<&str>,
    url: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let tab = match page {
        Some(source) => StaticTab::new(load_page(source, url, config).await?),
        None => StaticTab::empty(),
    };
    let extension = start_extension(config, tab).await?;

    println!("{}", extension.router().handle_json(message).await);
    Ok(())
}
