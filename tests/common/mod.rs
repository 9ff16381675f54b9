// File: common/mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025

#![allow(dead_code)]

use std::collections::HashMap;
use wiremock::ResponseTemplate;

pub fn create_mock_response(status: u16, body: &str, headers: HashMap<&str, &str>) -> ResponseTemplate {
    let mut response = ResponseTemplate::new(status).set_body_string(body);
    for (key, value) in headers {
        response = response.append_header(key, value);
    }
    response
}

pub fn create_html_response(content: &str, headers: HashMap<&str, &str>) -> ResponseTemplate {
    let mut response = ResponseTemplate::new(200).set_body_raw(content, "text/html; charset=utf-8");
    for (key, value) in headers {
        response = response.append_header(key, value);
    }
    response
}

pub fn sample_app_router_html() -> String {
    r#"<!DOCTYPE html>
<html>
<head>
    <title>Dashboard</title>
    <script src="/_next/static/chunks/webpack.js" async></script>
</head>
<body>
    <div id="__next"></div>
    <script>(self.__next_f=self.__next_f||[]).push([0]);</script>
    <script>self.__next_f.push([1,"1:HL[\"/_next/static/css/app.css\",\"style\"]\n"])</script>
</body>
</html>"#
        .to_string()
}

pub fn sample_flight_payload() -> String {
    "0:[\"$\",\"$L1\",null,{}]\n1:I[\"(app-pages-browser)/./app/page.js\",[\"app/page\",\"static/chunks/app/page.js\"],\"default\"]\n"
        .to_string()
}

pub fn cloudflare_headers() -> HashMap<&'static str, &'static str> {
    let mut headers = HashMap::new();
    headers.insert("server", "cloudflare");
    headers.insert("cf-ray", "8a1b2c3d4e5f6789-FRA");
    headers.insert("cf-cache-status", "DYNAMIC");
    headers
}

pub fn vercel_headers() -> HashMap<&'static str, &'static str> {
    let mut headers = HashMap::new();
    headers.insert("server", "Vercel");
    headers.insert("x-vercel-id", "fra1::iad1::8ssqm-1700000000000-abc");
    headers.insert("x-vercel-cache", "MISS");
    headers
}
