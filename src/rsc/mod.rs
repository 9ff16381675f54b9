// File: mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025

pub mod fingerprint;
pub mod passive;

pub use fingerprint::{run_fingerprint, FingerprintResult};
pub use passive::{scan_passive, PageDocument, PassiveScanResult};

/// Media type of the component streaming protocol.
pub const COMPONENT_CONTENT_TYPE: &str = "text/x-component";
/// Request header that asks the app router for serialized component output.
pub const RSC_HEADER: &str = "RSC";
