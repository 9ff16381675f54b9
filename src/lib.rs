// File: lib.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_inception)]
#![allow(clippy::bool_assert_comparison)]

pub mod cli;
pub mod config;
pub mod errors;
pub mod http;
pub mod httpinner;
pub mod report;
pub mod rsc;
pub mod session;
pub mod waf;
