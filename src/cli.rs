//! CLI definitions for TLDR.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use tldr_protocols::{SummaryLength, SummaryStyle};

/// TLDR CLI.
#[derive(Parser)]
#[command(name = "tldr")]
#[command(about = "Summarize the page you are reading")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.tldr/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// A page to act on.
#[derive(Args, Clone)]
pub(crate) struct PageArgs {
    /// http(s) URL to fetch, or a local HTML file
    pub source: String,

    /// Page URL to use instead of the source location
    #[arg(long)]
    pub url: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the readable text of a page
    Extract {
        #[command(flatten)]
        page: PageArgs,

        /// Print the full extraction result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print title, URL, hostname and word count of a page
    Info {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Summarize a page, or only the given selection of it
    Summarize {
        #[command(flatten)]
        page: PageArgs,

        /// Summarize this text instead of the whole page
        #[arg(long)]
        selection: Option<String>,

        /// Summary length for this run (short, medium, long)
        #[arg(long)]
        length: Option<SummaryLength>,

        /// Summary style for this run (bullet, paragraph, key-points)
        #[arg(long)]
        style: Option<SummaryStyle>,
    },

    /// Settings management commands
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Check that the configured backend is reachable
    Health {
        /// Backend URL to test instead of the saved one
        #[arg(long)]
        backend_url: Option<String>,
    },

    /// Dispatch one JSON message and print the JSON reply
    Message {
        /// Message such as {"action": "getSettings"}
        message: String,

        /// Page the message refers to (URL or local HTML file)
        #[arg(long)]
        page: Option<String>,

        /// Page URL to use instead of the page location
        #[arg(long)]
        url: Option<String>,
    },
}

#[derive(Subcommand)]
pub(crate) enum SettingsAction {
    /// Show the saved settings
    Show,

    /// Change one or more settings
    Set {
        #[arg(long)]
        length: Option<SummaryLength>,

        #[arg(long)]
        style: Option<SummaryStyle>,

        #[arg(long)]
        backend_url: Option<String>,

        #[arg(long)]
        auto_summarize: Option<bool>,

        #[arg(long)]
        max_text_length: Option<usize>,
    },

    /// Restore the default settings
    Reset,
}
