// File: errors.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    #[error("Request cancelled")]
    Cancelled,
    #[error("Failed to read body: {0}")]
    BodyRead(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ProbeError {
    /// Transport-class failures: the request never produced a usable response.
    pub fn is_network(&self) -> bool {
        !matches!(self, Self::InvalidUrl(_))
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}

impl From<url::ParseError> for ProbeError {
    fn from(error: url::ParseError) -> Self {
        Self::InvalidUrl(error.to_string())
    }
}

pub type ProbeResult<T> = Result<T, ProbeError>;
