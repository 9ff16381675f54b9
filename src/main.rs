// File: main.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use log::debug;
use rscprobe::cli::Cli;
use rscprobe::http::Http;
use rscprobe::report::{ReportGenerator, ScanReport};
use rscprobe::rsc::PageDocument;
use rscprobe::session::{ScanSession, SessionEvent};
use simple_logger::SimpleLogger;

async fn load_document(cli: &Cli) -> Result<PageDocument> {
    match &cli.document {
        Some(path) => {
            let markup = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read document {}", path.display()))?;
            Ok(PageDocument::new(&cli.content_type, markup))
        }
        None => {
            let http = Http::new(cli.to_config())?;
            ScanSession::load_document(&http, &cli.url)
                .await
                .with_context(|| format!("Failed to load {}", cli.url))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    SimpleLogger::new()
        .with_level(cli.effective_log_level())
        .init()
        .context("Failed to initialize logger")?;
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = cli.to_config();
    let document = load_document(&cli).await?;
    let (session, mut events) = ScanSession::start(config.clone(), cli.url.clone(), &document)?;

    if let Ok(SessionEvent::RscLikely) = events.try_recv() {
        eprintln!("{} {}", "!".red().bold(), "Page shows RSC indicators".red());
    }

    let passive = session.passive().clone();
    let waf = session.detect_waf().await;
    let fingerprint = if config.detect_all() {
        Some(session.run_fingerprint().await)
    } else {
        None
    };

    let report = ScanReport {
        url: session.target().to_string(),
        passive,
        waf,
        fingerprint,
    };
    println!("{}", ReportGenerator::render(&report, cli.format)?);

    debug!("Scan of {} finished", session.target());
    session.shutdown();
    Ok(())
}
