// File: mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025

pub mod detector;
pub mod matcher;
pub mod signatures;

use chrono::{DateTime, Utc};
use regex::{Regex, RegexBuilder};
use serde::Serialize;

pub use detector::WafDetector;
pub use matcher::match_signature;
pub use signatures::catalog;

/// A case-insensitive pattern that remembers its source for evidence strings.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: &'static str,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &'static str) -> Self {
        let regex = RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .unwrap_or_else(|_| panic!("Invalid signature pattern: {}", source));
        Self { source, regex }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

#[derive(Debug, Clone)]
pub enum Matcher {
    /// Header looked up by exact (case-insensitive) name; presence is evidence
    /// unless a value pattern is given.
    Header {
        name: &'static str,
        value: Option<Pattern>,
    },
    /// First header whose name matches.
    HeaderPattern(Pattern),
}

impl Matcher {
    pub fn header(name: &'static str) -> Self {
        Matcher::Header { name, value: None }
    }

    pub fn header_value(name: &'static str, pattern: &'static str) -> Self {
        Matcher::Header {
            name,
            value: Some(Pattern::new(pattern)),
        }
    }

    pub fn header_name(pattern: &'static str) -> Self {
        Matcher::HeaderPattern(Pattern::new(pattern))
    }
}

#[derive(Debug, Clone)]
pub struct WafSignature {
    pub name: &'static str,
    pub matchers: Vec<Matcher>,
    pub body_patterns: Vec<Pattern>,
}

impl WafSignature {
    pub fn new(name: &'static str, matchers: Vec<Matcher>, body_patterns: &[&'static str]) -> Self {
        Self {
            name,
            matchers,
            body_patterns: body_patterns.iter().map(|p| Pattern::new(*p)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WafMatch {
    pub name: String,
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WafDetectionResult {
    pub detected: bool,
    pub matches: Vec<WafMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub checked_at: DateTime<Utc>,
}

impl WafDetectionResult {
    pub fn completed(matches: Vec<WafMatch>, status: u16, checked_url: String) -> Self {
        Self {
            detected: !matches.is_empty(),
            matches,
            status: Some(status),
            checked_url: Some(checked_url),
            error: None,
            checked_at: Utc::now(),
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            detected: false,
            matches: Vec::new(),
            status: None,
            checked_url: None,
            error: Some(error),
            checked_at: Utc::now(),
        }
    }

    pub fn vendors(&self) -> Vec<&str> {
        self.matches.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn primary_vendor(&self) -> Option<&str> {
        self.matches.first().map(|m| m.name.as_str())
    }
}
