//! Payview CLI - Render captured HTTP payloads as highlighted HTML
//!
//! Usage:
//!   payview render [FILE]       Render a body as highlighted markup
//!   payview detect [FILE]       Print the detected syntax (plain, json, xml)
//!   payview format [FILE]       Print the body as it would be displayed
//!   payview highlight <TEXT>    Highlight a search term in plain text
//!   payview log [FILE]          Render a logged request/response pair

mod commands;
mod config;
mod page;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::body::BodyOptions;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "payview")]
#[command(author = "Payview Team")]
#[command(version)]
#[command(about = "Render captured HTTP payloads as highlighted HTML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a body as syntax-highlighted markup
    Render {
        /// File holding the body (reads stdin if omitted)
        file: Option<PathBuf>,

        /// Declared content-type of the body
        #[arg(short = 't', long, env = "PAYVIEW_CONTENT_TYPE")]
        content_type: Option<String>,

        /// Search term to highlight
        #[arg(short, long)]
        search: Option<String>,

        /// Wrap output in a complete HTML document
        #[arg(long)]
        standalone: bool,
    },

    /// Print the detected syntax of a body
    Detect {
        /// File holding the body (reads stdin if omitted)
        file: Option<PathBuf>,

        /// Declared content-type of the body
        #[arg(short = 't', long, env = "PAYVIEW_CONTENT_TYPE")]
        content_type: Option<String>,
    },

    /// Print a body as it would be displayed (pretty-printed JSON)
    Format {
        /// File holding the body (reads stdin if omitted)
        file: Option<PathBuf>,

        /// Declared content-type of the body
        #[arg(short = 't', long, env = "PAYVIEW_CONTENT_TYPE")]
        content_type: Option<String>,
    },

    /// Highlight a search term in plain text (headers, URLs)
    Highlight {
        /// Text to highlight
        text: String,

        /// Search term to highlight
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Render a logged request/response pair stored as JSON
    Log {
        /// File holding the log record (reads stdin if omitted)
        file: Option<PathBuf>,

        /// Search term to highlight
        #[arg(short, long)]
        search: Option<String>,

        /// Wrap output in a complete HTML document
        #[arg(long)]
        standalone: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging on stderr; stdout carries only markup
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},payview_cli=info", log_level).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = config::Config::load()?;

    match cli.command {
        Commands::Render {
            file,
            content_type,
            search,
            standalone,
        } => {
            let opts = BodyOptions {
                file,
                content_type,
                search,
                standalone,
            };
            commands::body::render(opts, &config)?;
        }

        Commands::Detect { file, content_type } => {
            let opts = BodyOptions {
                file,
                content_type,
                ..Default::default()
            };
            commands::body::detect(opts, &config)?;
        }

        Commands::Format { file, content_type } => {
            let opts = BodyOptions {
                file,
                content_type,
                ..Default::default()
            };
            commands::body::format(opts, &config)?;
        }

        Commands::Highlight { text, search } => {
            commands::body::highlight(&text, search, &config)?;
        }

        Commands::Log {
            file,
            search,
            standalone,
        } => {
            commands::log::run(file.as_deref(), search, standalone, &config)?;
        }
    }

    Ok(())
}
