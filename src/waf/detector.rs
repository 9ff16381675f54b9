// File: detector.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025

use super::{catalog, match_signature, WafDetectionResult, WafMatch};
use crate::http::Http;
use log::{debug, warn};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Probes a target once and memoizes the outcome for the detector's lifetime.
///
/// Concurrent callers arriving while the probe is in flight wait on the same
/// initialization, so the target sees a single request. Failures are cached too.
#[derive(Debug)]
pub struct WafDetector {
    http: Http,
    target: String,
    cache: OnceCell<Arc<WafDetectionResult>>,
}

impl WafDetector {
    pub fn new(http: Http, target: impl Into<String>) -> Self {
        Self {
            http,
            target: target.into(),
            cache: OnceCell::new(),
        }
    }

    pub async fn detect_waf(&self) -> Arc<WafDetectionResult> {
        self.cache.get_or_init(|| self.probe()).await.clone()
    }

    pub fn cached(&self) -> Option<Arc<WafDetectionResult>> {
        self.cache.get().cloned()
    }

    async fn probe(&self) -> Arc<WafDetectionResult> {
        debug!("Probing {} for WAF signatures", self.target);
        let result = match self.http.get(&self.target, &[]).await {
            Ok(response) => {
                let body = response.body_prefix(self.http.config().body_limit());
                let matches: Vec<WafMatch> = catalog()
                    .iter()
                    .filter_map(|sig| {
                        match_signature(sig, response.headers(), body).map(|evidence| WafMatch {
                            name: sig.name.to_string(),
                            evidence,
                        })
                    })
                    .collect();
                WafDetectionResult::completed(matches, response.status(), response.url().to_string())
            }
            Err(e) => {
                warn!("WAF detection failed for {}: {}", self.target, e);
                WafDetectionResult::failed(e.to_string())
            }
        };
        Arc::new(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigParameter;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn detector_for(url: String) -> WafDetector {
        let mut config = ConfigParameter::new();
        config.set_timeout(5);
        WafDetector::new(Http::new(config).unwrap(), url)
    }

    #[tokio::test]
    async fn test_detects_multiple_vendors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(header("cache-control", "no-cache"))
            .respond_with(
                ResponseTemplate::new(200)
                    .append_header("server", "cloudflare")
                    .append_header("x-vercel-id", "fra1::iad1::abc")
                    .set_body_string("<html>hello</html>"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let detector = detector_for(format!("{}/", server.uri()));
        let result = detector.detect_waf().await;

        assert!(result.detected);
        assert_eq!(result.vendors(), vec!["Cloudflare", "Vercel"]);
        assert_eq!(result.status, Some(200));
        assert_eq!(result.checked_url.as_deref(), Some(format!("{}/", server.uri()).as_str()));
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_body_beyond_limit_is_ignored() {
        let server = MockServer::start().await;
        let body = format!("{}sucuri", "a".repeat(5000));
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let result = detector_for(server.uri()).detect_waf().await;
        assert!(!result.detected);
        assert!(result.matches.is_empty());
    }

    #[tokio::test]
    async fn test_second_call_returns_cached_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).append_header("x-sucuri-id", "11005"))
            .expect(1)
            .mount(&server)
            .await;

        let detector = detector_for(server.uri());
        assert!(detector.cached().is_none());
        let first = detector.detect_waf().await;
        let second = detector.detect_waf().await;

        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &detector.cached().unwrap()));
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_calls_share_one_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .append_header("x-akamai-transformed", "9 - 0 pmb=mRUM,1")
                    .set_delay(std::time::Duration::from_millis(200)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let detector = Arc::new(detector_for(server.uri()));
        let (a, b) = tokio::join!(detector.detect_waf(), detector.detect_waf());

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.vendors(), vec!["Akamai"]);
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_network_failure_is_cached() {
        // Nothing listens on port 9 locally.
        let detector = detector_for("http://127.0.0.1:9/".to_string());
        let first = detector.detect_waf().await;
        let second = detector.detect_waf().await;

        assert!(!first.detected);
        assert!(first.matches.is_empty());
        assert!(first.error.is_some());
        assert!(Arc::ptr_eq(&first, &second));
    }
}
