// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025

use crate::rsc::{FingerprintResult, PassiveScanResult};
use crate::waf::WafDetectionResult;
use colored::*;
use serde::Serialize;
use std::fmt::Write;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub url: String,
    pub passive: PassiveScanResult,
    pub waf: Arc<WafDetectionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<FingerprintResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

pub struct ReportGenerator;

impl ReportGenerator {
    pub fn render(report: &ScanReport, format: ReportFormat) -> serde_json::Result<String> {
        match format {
            ReportFormat::Text => Ok(Self::render_text(report)),
            ReportFormat::Json => serde_json::to_string_pretty(report),
        }
    }

    pub fn render_text(report: &ScanReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", report.url.bold());

        let verdict = if report.passive.is_rsc {
            "likely RSC".red().bold()
        } else {
            "no RSC indicators".green()
        };
        let _ = writeln!(out, "  Passive: {} (score {})", verdict, report.passive.score);
        for detail in &report.passive.details {
            let _ = writeln!(out, "    - {}", detail);
        }

        match (&report.waf.error, report.waf.detected) {
            (Some(error), _) => {
                let _ = writeln!(out, "  WAF: {} {}", "error".yellow(), error);
            }
            (None, false) => {
                let _ = writeln!(out, "  WAF: {}", "none detected".green());
            }
            (None, true) => {
                let _ = writeln!(out, "  WAF: {}", report.waf.vendors().join(", ").yellow().bold());
                for waf_match in &report.waf.matches {
                    for evidence in &waf_match.evidence {
                        let _ = writeln!(out, "    - [{}] {}", waf_match.name, evidence);
                    }
                }
            }
        }

        if let Some(fingerprint) = &report.fingerprint {
            let verdict = if fingerprint.detected {
                "RSC responses confirmed".red().bold()
            } else {
                "not detected".green()
            };
            let _ = writeln!(out, "  Fingerprint: {}", verdict);
            for detail in &fingerprint.details {
                let _ = writeln!(out, "    - {}", detail);
            }
        }
        out
    }
}
