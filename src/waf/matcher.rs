// File: matcher.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025

use super::{Matcher, WafSignature};
use crate::httpinner::HeaderSet;
use log::info;

/// Evidence for `signature` against one response, or `None` when nothing fired.
///
/// Header matchers are evaluated in declaration order, then body patterns.
/// `body` is matched as given; callers truncate it beforehand.
pub fn match_signature(signature: &WafSignature, headers: &HeaderSet, body: &str) -> Option<Vec<String>> {
    let mut evidence = Vec::new();

    for matcher in &signature.matchers {
        match matcher {
            Matcher::Header { name, value } => {
                let Some(header_value) = headers.get(name).filter(|v| !v.is_empty()) else {
                    continue;
                };
                if value.as_ref().map_or(true, |p| p.is_match(header_value)) {
                    evidence.push(format!("Header {}: {}", name, header_value));
                }
            }
            Matcher::HeaderPattern(pattern) => {
                if let Some((name, header_value)) = headers.iter().find(|(name, _)| pattern.is_match(name)) {
                    evidence.push(format!("Header {}: {}", name, header_value));
                }
            }
        }
    }

    for pattern in &signature.body_patterns {
        if pattern.is_match(body) {
            evidence.push(format!("Body matched: {}", pattern.source()));
        }
    }

    if evidence.is_empty() {
        None
    } else {
        info!("{} matched with {} evidence item(s)", signature.name, evidence.len());
        Some(evidence)
    }
}
