// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025

pub const DEFAULT_BODY_LIMIT: usize = 4096;

#[derive(Debug, Clone)]
pub struct ConfigParameter {
    detect_all: bool,
    timeout: u64,
    body_limit: usize,
    user_agent: String,
    cookie: Option<String>,
}

impl Default for ConfigParameter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParameter {
    pub fn new() -> Self {
        Self {
            detect_all: false,
            timeout: 10,
            body_limit: DEFAULT_BODY_LIMIT,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            cookie: None,
        }
    }

    pub fn set_detect_all(&mut self, detect_all: bool) {
        self.detect_all = detect_all;
    }

    pub fn detect_all(&self) -> bool {
        self.detect_all
    }

    pub fn set_timeout(&mut self, timeout: u64) {
        self.timeout = timeout;
    }

    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    pub fn set_body_limit(&mut self, body_limit: usize) {
        self.body_limit = body_limit;
    }

    pub fn body_limit(&self) -> usize {
        self.body_limit
    }

    pub fn set_user_agent(&mut self, user_agent: String) {
        self.user_agent = user_agent;
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Cookie header sent with every probe, standing in for same-origin credentials.
    pub fn set_cookie(&mut self, cookie: Option<String>) {
        self.cookie = cookie;
    }

    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }
}
