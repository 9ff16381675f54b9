// File: passive.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025

use super::COMPONENT_CONTENT_TYPE;
use crate::httpinner::HttpInner;
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const RSC_SCORE_THRESHOLD: u32 = 50;

const CONTENT_TYPE_WEIGHT: u32 = 100;
const ROUTER_GLOBAL_WEIGHT: u32 = 80;
const FLIGHT_LIBRARY_WEIGHT: u32 = 30;

static ROUTER_GLOBAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(window|self)\.__next_f\s*=").unwrap());

const FLIGHT_LIBRARY: &str = "react-server-dom-webpack";

/// The already-loaded page a passive scan inspects.
#[derive(Debug, Clone, Default)]
pub struct PageDocument {
    content_type: String,
    markup: String,
}

impl PageDocument {
    /// `content_type` is reduced to its media type, as a browser reports it.
    pub fn new(content_type: &str, markup: impl Into<String>) -> Self {
        let media_type = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        Self {
            content_type: media_type,
            markup: markup.into(),
        }
    }

    pub fn from_response(response: &HttpInner) -> Self {
        Self::new(response.content_type(), response.body())
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassiveScanResult {
    pub is_rsc: bool,
    pub score: u32,
    pub details: Vec<String>,
}

pub fn scan_passive(document: &PageDocument) -> PassiveScanResult {
    let mut score = 0;
    let mut details = Vec::new();

    if document.content_type() == COMPONENT_CONTENT_TYPE {
        score += CONTENT_TYPE_WEIGHT;
        details.push(format!("Found: Content-Type {}", COMPONENT_CONTENT_TYPE));
    }
    if ROUTER_GLOBAL.is_match(document.markup()) {
        score += ROUTER_GLOBAL_WEIGHT;
        details.push("Found: window.__next_f (App Router)".to_string());
    }
    if document.markup().contains(FLIGHT_LIBRARY) {
        score += FLIGHT_LIBRARY_WEIGHT;
        details.push(format!("Found: {}", FLIGHT_LIBRARY));
    }

    let is_rsc = score >= RSC_SCORE_THRESHOLD;
    if is_rsc {
        info!("Passive scan flagged RSC usage (score {})", score);
    }
    PassiveScanResult { is_rsc, score, details }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    const ROUTER_SCRIPT: &str = "<script>(self.__next_f=self.__next_f||[]).push([0])</script>";
    const LIBRARY_SCRIPT: &str = r#"<script src="/_next/static/chunks/react-server-dom-webpack-client.js"></script>"#;

    #[test]
    fn test_library_string_alone_is_not_enough() {
        let doc = PageDocument::new("text/html; charset=utf-8", format!("<html>{}</html>", LIBRARY_SCRIPT));
        let result = scan_passive(&doc);

        assert_eq!(result.score, 30);
        assert!(!result.is_rsc);
        assert_eq!(result.details, vec!["Found: react-server-dom-webpack"]);
    }

    #[test]
    fn test_router_global_pushes_over_threshold() {
        let doc = PageDocument::new("text/html", format!("<html>{}{}</html>", ROUTER_SCRIPT, LIBRARY_SCRIPT));
        let result = scan_passive(&doc);

        assert_eq!(result.score, 110);
        assert!(result.is_rsc);
        assert_eq!(
            result.details,
            vec!["Found: window.__next_f (App Router)", "Found: react-server-dom-webpack"]
        );
    }

    #[test]
    fn test_content_type_alone_suffices() {
        let doc = PageDocument::new("text/x-component", "0:[\"$\",\"div\",null,{}]");
        let result = scan_passive(&doc);

        assert!(result.is_rsc);
        assert_eq!(result.score, 100);
        assert_eq!(result.details, vec!["Found: Content-Type text/x-component"]);
    }

    #[test]
    fn test_all_indicators_in_check_order() {
        let doc = PageDocument::new("Text/X-Component; charset=utf-8", format!("{}{}", ROUTER_SCRIPT, LIBRARY_SCRIPT));
        let result = scan_passive(&doc);

        assert_eq!(result.score, 210);
        assert_eq!(result.details.len(), 3);
        assert!(result.details[0].contains("Content-Type"));
        assert!(result.details[1].contains("__next_f"));
        assert!(result.details[2].contains("react-server-dom-webpack"));
    }

    #[rstest]
    #[case("window.__next_f = []")]
    #[case("self.__next_f=self.__next_f||[]")]
    #[case("window.__next_f\n=\t[]")]
    fn test_router_global_variants(#[case] markup: &str) {
        let result = scan_passive(&PageDocument::new("text/html", markup));
        assert!(result.is_rsc);
    }

    #[rstest]
    #[case("window.__next_f.push([1])")]
    #[case("globalThis.__next_f = []")]
    #[case("<html><body>plain page</body></html>")]
    fn test_non_rsc_documents(#[case] markup: &str) {
        let result = scan_passive(&PageDocument::new("text/html", markup));
        assert!(!result.is_rsc);
        assert!(result.details.is_empty());
    }
}
