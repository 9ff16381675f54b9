// File: session.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025

use crate::config::ConfigParameter;
use crate::errors::ProbeResult;
use crate::http::Http;
use crate::rsc::{run_fingerprint, scan_passive, FingerprintResult, PageDocument, PassiveScanResult};
use crate::waf::{WafDetectionResult, WafDetector};
use log::{debug, info};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The passive scan found likely RSC usage. Sent at most once per session.
    RscLikely,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    GetPassive,
    RunFingerprint,
    DetectWaf,
}

impl std::str::FromStr for Request {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get_passive" => Ok(Request::GetPassive),
            "run_fingerprint" => Ok(Request::RunFingerprint),
            "detect_waf" => Ok(Request::DetectWaf),
            other => Err(format!("Unknown request: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Response {
    Passive(PassiveScanResult),
    Fingerprint(FingerprintResult),
    Waf(Arc<WafDetectionResult>),
}

/// One scan of one page. Owns the WAF cache; dropping the session cancels
/// any request still in flight.
#[derive(Debug)]
pub struct ScanSession {
    target: String,
    http: Http,
    passive: PassiveScanResult,
    waf: Arc<WafDetector>,
    cancel: CancellationToken,
}

impl ScanSession {
    /// Fetch the page the session will inspect.
    pub async fn load_document(http: &Http, url: &str) -> ProbeResult<PageDocument> {
        let response = http.get(url, &[]).await?;
        Ok(PageDocument::from_response(&response))
    }

    /// Run the passive scan and start WAF detection in the background.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(
        config: ConfigParameter,
        target: impl Into<String>,
        document: &PageDocument,
    ) -> ProbeResult<(Arc<Self>, mpsc::UnboundedReceiver<SessionEvent>)> {
        let target = target.into();
        let cancel = CancellationToken::new();
        let http = Http::with_cancellation(config, cancel.clone())?;
        let (events, receiver) = mpsc::unbounded_channel();

        let passive = scan_passive(document);
        if passive.is_rsc {
            info!("{} looks like an RSC application", target);
            // Receiver may already be gone; nobody to notify then.
            let _ = events.send(SessionEvent::RscLikely);
        }

        let waf = Arc::new(WafDetector::new(http.clone(), target.clone()));
        let background = Arc::clone(&waf);
        tokio::spawn(async move {
            background.detect_waf().await;
        });

        debug!("Session for {} started", target);
        let session = Arc::new(ScanSession {
            target,
            http,
            passive,
            waf,
            cancel,
        });
        Ok((session, receiver))
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn passive(&self) -> &PassiveScanResult {
        &self.passive
    }

    pub async fn detect_waf(&self) -> Arc<WafDetectionResult> {
        self.waf.detect_waf().await
    }

    pub fn cached_waf(&self) -> Option<Arc<WafDetectionResult>> {
        self.waf.cached()
    }

    pub async fn run_fingerprint(&self) -> FingerprintResult {
        run_fingerprint(&self.http, &self.target).await
    }

    pub async fn handle(&self, request: Request) -> Response {
        debug!("Handling {:?} for {}", request, self.target);
        match request {
            Request::GetPassive => Response::Passive(self.passive.clone()),
            Request::RunFingerprint => Response::Fingerprint(self.run_fingerprint().await),
            Request::DetectWaf => Response::Waf(self.detect_waf().await),
        }
    }

    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for ScanSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
