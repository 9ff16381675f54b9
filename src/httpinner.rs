// File: httpinner.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025

use reqwest::header::HeaderMap;
use std::collections::BTreeMap;

/// Response headers keyed by lower-cased name. Built once per response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderSet {
    entries: BTreeMap<String, String>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_header_map(headers: &HeaderMap) -> Self {
        headers
            .iter()
            .map(|(name, value)| (name.as_str(), String::from_utf8_lossy(value.as_bytes())))
            .fold(Self::new(), |mut set, (name, value)| {
                // Repeated headers: the last one wins, like a Headers.forEach into a plain map.
                set.entries.insert(name.to_ascii_lowercase(), value.into_owned());
                set
            })
    }

    pub fn from_pairs<K: AsRef<str>, V: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_ascii_lowercase(), v.into()))
            .collect();
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct HttpInner {
    body: String,
    headers: HeaderSet,
    status: u16,
    url: String,
}

impl HttpInner {
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn content_type(&self) -> &str {
        self.headers.get("content-type").unwrap_or("")
    }

    pub fn new() -> Self {
        HttpInner {
            body: String::new(),
            headers: HeaderSet::new(),
            status: 0,
            url: String::new(),
        }
    }

    pub fn new_with_all(headers: HeaderSet, body: String, status: u16, url: String) -> Self {
        HttpInner {
            body,
            headers,
            status,
            url,
        }
    }

    /// First `limit` characters of the body, never splitting a code point.
    pub fn body_prefix(&self, limit: usize) -> &str {
        match self.body.char_indices().nth(limit) {
            Some((idx, _)) => &self.body[..idx],
            None => &self.body,
        }
    }
}
