// File: http.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025

use crate::config::ConfigParameter;
use crate::errors::{ProbeError, ProbeResult};
use crate::httpinner::{HeaderSet, HttpInner};
use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CACHE_CONTROL, COOKIE, PRAGMA};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
pub struct Http {
    config: ConfigParameter,
    client: reqwest::Client,
    cancel: CancellationToken,
}

impl Http {
    pub fn new(config: ConfigParameter) -> ProbeResult<Self> {
        Self::with_cancellation(config, CancellationToken::new())
    }

    pub fn with_cancellation(config: ConfigParameter, cancel: CancellationToken) -> ProbeResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .build()?;
        Ok(Http { config, client, cancel })
    }

    pub fn config(&self) -> &ConfigParameter {
        &self.config
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// GET `url`, bypassing caches, with `extra` headers on top of the defaults.
    /// Bounded by the configured timeout and the session's cancellation token.
    pub async fn get(&self, url: &str, extra: &[(&str, &str)]) -> ProbeResult<HttpInner> {
        let url = url::Url::parse(url)?;
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        if let Some(cookie) = self.config.cookie() {
            let value = HeaderValue::from_str(cookie).map_err(|e| ProbeError::Network(e.to_string()))?;
            headers.insert(COOKIE, value);
        }
        for (name, value) in extra {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| ProbeError::Network(e.to_string()))?;
            let value = HeaderValue::from_str(value).map_err(|e| ProbeError::Network(e.to_string()))?;
            headers.insert(name, value);
        }

        debug!("GET {} ({} extra headers)", url, extra.len());
        let request = self.client.get(url).headers(headers).send();
        let timeout = self.config.timeout();

        let exchange = async {
            let response = request.await?;
            let final_url = response.url().to_string();
            let status = response.status().as_u16();
            let headers = HeaderSet::from_header_map(response.headers());
            let body = response
                .text()
                .await
                .map_err(|e| ProbeError::BodyRead(e.to_string()))?;
            Ok::<_, ProbeError>(HttpInner::new_with_all(headers, body, status, final_url))
        };

        tokio::select! {
            _ = self.cancel.cancelled() => Err(ProbeError::Cancelled),
            result = tokio::time::timeout(Duration::from_secs(timeout), exchange) => {
                result.map_err(|_| ProbeError::Timeout(timeout))?
            }
        }
    }
}
