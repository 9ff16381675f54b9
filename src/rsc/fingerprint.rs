// File: fingerprint.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025

use super::{COMPONENT_CONTENT_TYPE, RSC_HEADER};
use crate::http::Http;
use crate::httpinner::HttpInner;
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Row index, colon, then a row type tag.
static FLIGHT_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^\d+:["IHL]"#).unwrap());

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FingerprintResult {
    pub detected: bool,
    pub details: Vec<String>,
}

impl FingerprintResult {
    fn from_details(details: Vec<String>) -> Self {
        Self {
            detected: !details.is_empty(),
            details,
        }
    }

    fn network_error() -> Self {
        Self {
            detected: false,
            details: vec!["Network Error".to_string()],
        }
    }
}

/// Signals in an RSC-flavoured response, in check order.
pub fn inspect_response(response: &HttpInner) -> Vec<String> {
    let mut details = Vec::new();
    let vary = response.headers().get("vary").unwrap_or("");

    if response.content_type().contains(COMPONENT_CONTENT_TYPE) {
        details.push(format!("Response Content-Type became {}", COMPONENT_CONTENT_TYPE));
    }
    if vary.contains(RSC_HEADER) {
        details.push(format!("Vary header contains '{}'", RSC_HEADER));
    }
    if FLIGHT_ROW.is_match(response.body()) {
        details.push("Body structure matches React Flight Protocol".to_string());
    }
    details
}

/// Re-request `url` asking for the component payload and look for the wire format.
/// Transport failures come back as an undetected result, never as an error.
pub async fn run_fingerprint(http: &Http, url: &str) -> FingerprintResult {
    match http.get(url, &[(RSC_HEADER, "1")]).await {
        Ok(response) => {
            let result = FingerprintResult::from_details(inspect_response(&response));
            if result.detected {
                info!("Active fingerprint of {}: {}", url, result.details.join(", "));
            }
            result
        }
        Err(e) => {
            warn!("Fingerprint request to {} failed: {}", url, e);
            FingerprintResult::network_error()
        }
    }
}
