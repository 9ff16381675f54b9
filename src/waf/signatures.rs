// File: signatures.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025

use super::{Matcher, WafSignature};
use once_cell::sync::Lazy;

static CATALOG: Lazy<Vec<WafSignature>> = Lazy::new(|| {
    vec![
        WafSignature::new(
            "Cloudflare",
            vec![
                Matcher::header_value("server", "cloudflare"),
                Matcher::header("cf-ray"),
                Matcher::header("cf-cache-status"),
            ],
            &["cloudflare", "attention required"],
        ),
        WafSignature::new(
            "AWS",
            vec![
                Matcher::header("x-amzn-requestid"),
                Matcher::header("x-amz-cf-id"),
                Matcher::header("x-amzn-trace-id"),
                Matcher::header_value("server", "awselb|amazon|cloudfront"),
            ],
            &["aws waf", "request blocked"],
        ),
        WafSignature::new(
            "Akamai",
            vec![
                Matcher::header_value("server", "akamai"),
                Matcher::header("x-akamai-transformed"),
                Matcher::header("x-akamai-session-info"),
            ],
            &["akamai", "akamai technologies"],
        ),
        WafSignature::new(
            "Fastly",
            vec![
                Matcher::header("x-served-by"),
                Matcher::header_value("x-cache", "fastly"),
                Matcher::header("x-fastly-request-id"),
            ],
            &["fastly"],
        ),
        WafSignature::new(
            "Imperva Incapsula",
            vec![
                Matcher::header("x-iinfo"),
                Matcher::header_value("x-cdn", "incapsula"),
                Matcher::header_value("server", "incapsula"),
            ],
            &["incapsula", "powered by imperva"],
        ),
        WafSignature::new(
            "Sucuri",
            vec![
                Matcher::header("x-sucuri-id"),
                Matcher::header("x-sucuri-block"),
                Matcher::header_value("server", "sucuri|cloudproxy"),
            ],
            &["access denied", "sucuri"],
        ),
        WafSignature::new(
            "F5 BIG-IP",
            vec![
                Matcher::header_value("server", "big-ip|f5"),
                Matcher::header("x-wa-info"),
                Matcher::header("x-cnection"),
            ],
            &["request rejected", "f5 networks"],
        ),
        WafSignature::new(
            "Barracuda",
            vec![
                Matcher::header_value("server", "barracuda"),
                Matcher::header("x-barracuda"),
                Matcher::header_name("x-barracuda-.*"),
            ],
            &["barracuda"],
        ),
        WafSignature::new(
            "Vercel",
            vec![
                Matcher::header_value("server", "vercel"),
                Matcher::header("x-vercel-cache"),
                Matcher::header("x-vercel-id"),
            ],
            &["vercel"],
        ),
        WafSignature::new(
            "Azure",
            vec![
                Matcher::header_value("server", "azure front door"),
                Matcher::header("x-azure-ref"),
                Matcher::header("x-azure-fdid"),
            ],
            &["azure"],
        ),
        WafSignature::new(
            "Google Cloud Armor",
            vec![
                Matcher::header_value("server", "google frontend"),
                Matcher::header("x-cloud-trace-context"),
            ],
            &["cloud armor"],
        ),
    ]
});

/// Vendor signatures in declaration order.
pub fn catalog() -> &'static [WafSignature] {
    &CATALOG
}

pub fn find(name: &str) -> Option<&'static WafSignature> {
    catalog().iter().find(|sig| sig.name.eq_ignore_ascii_case(name))
}
