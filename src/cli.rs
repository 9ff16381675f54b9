// File: cli.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025

use clap::Parser;
use std::path::PathBuf;

use crate::config::{ConfigParameter, DEFAULT_BODY_LIMIT};
use crate::report::ReportFormat;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    /// Page to scan
    pub url: String,

    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,

    #[arg(short = 'v', long = "verbose", help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long = "no-color", help = "Disable colored output")]
    pub no_color: bool,

    #[arg(
        short = 't',
        long = "timeout",
        default_value_t = 10,
        help = "HTTP request timeout in seconds"
    )]
    pub timeout: u64,

    #[arg(
        short = 'd',
        long = "detect-all",
        help = "Also send the active RSC fingerprint request"
    )]
    pub detect_all: bool,

    #[arg(long = "body-limit", default_value_t = DEFAULT_BODY_LIMIT)]
    pub body_limit: usize,

    #[arg(long = "cookie", help = "Cookie header to send with every request")]
    pub cookie: Option<String>,

    #[arg(
        long = "document",
        help = "Read the page markup from a file instead of fetching it"
    )]
    pub document: Option<PathBuf>,

    #[arg(long = "content-type", default_value = "text/html", requires = "document")]
    pub content_type: String,

    #[arg(short = 'f', long = "format", value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

impl Cli {
    pub fn to_config(&self) -> ConfigParameter {
        let mut config = ConfigParameter::new();
        config.set_timeout(self.timeout);
        config.set_detect_all(self.detect_all);
        config.set_body_limit(self.body_limit);
        config.set_cookie(self.cookie.clone());
        config
    }

    pub fn effective_log_level(&self) -> log::LevelFilter {
        if self.verbose {
            return log::LevelFilter::Debug;
        }
        self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}
