// Copyright 2026 Brandkit Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use brandkit::cli;
use brandkit::config::ScraperConfig;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "brandkit",
    about = "Brandkit — extract brand name, slogan, logo and social links from a website",
    version
)]
struct Cli {
    /// Output results as JSON (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Path to a Chromium/Chrome binary for the headless fallback
    #[arg(long, global = true)]
    chromium_path: Option<PathBuf>,

    /// Never launch a browser; static HTTP fetch only
    #[arg(long, global = true)]
    no_render: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape one website for brand metadata
    Scrape {
        /// Absolute URL of the site (e.g. "https://example.com")
        url: String,
    },
    /// Serve the scraper over HTTP
    Serve {
        /// Listen host
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Listen port
        #[arg(long, default_value = "5001")]
        port: u16,
    },
    /// Check whether a headless browser is available
    Doctor,
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if cli.json {
        std::env::set_var("BRANDKIT_JSON", "1");
    }

    let mut config = ScraperConfig::from_env();
    if let Some(path) = cli.chromium_path {
        config = config.with_chromium_path(path);
    }
    if cli.no_render {
        config = config.with_render_enabled(false);
    }

    let result = match cli.command {
        Commands::Scrape { url } => cli::scrape_cmd::run(&url, &config).await,
        Commands::Serve { host, port } => cli::serve_cmd::run(&host, port, &config).await,
        Commands::Doctor => cli::doctor::run(&config).await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "brandkit", &mut std::io::stdout());
            Ok(())
        }
    };

    // 0=success, 1=error
    if let Err(e) = &result {
        if cli::output::is_json() {
            cli::output::print_json(&serde_json::json!({
                "error": true,
                "message": format!("{e:#}"),
            }));
        } else {
            eprintln!("  Error: {e:#}");
        }
        std::process::exit(1);
    }

    result
}
