// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Machine-readable output for CI pipelines

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;
use crate::http::HeaderMap;
use crate::scanner::ScanResult;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    url: &'a str,
    http_code: u16,
    headers: JsonHeaders<'a>,
    missing: &'a [String],
    missing_count: usize,
    secure: bool,
    timestamp: String,
}

#[derive(Debug, Serialize)]
struct JsonHeaders<'a> {
    security: &'a IndexMap<String, Option<String>>,
    all: &'a HeaderMap,
}

#[derive(Debug, Serialize)]
struct JsonError<'a> {
    error: &'a str,
}

/// Serialize a scan result as pretty-printed JSON
pub fn to_json(result: &ScanResult) -> Result<String> {
    let report = JsonReport {
        url: result.url.as_str(),
        http_code: result.http_code,
        headers: JsonHeaders {
            security: result.report.security_headers(),
            all: &result.headers,
        },
        missing: result.report.missing(),
        missing_count: result.report.missing_count(),
        secure: result.report.is_secure(),
        timestamp: iso8601(&result.timestamp),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

/// Serialize a failure as `{"error": "..."}`
pub fn error_to_json(message: &str) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonError { error: message })?)
}

/// `2026-01-31T09:15:00+01:00`
fn iso8601(timestamp: &DateTime<Local>) -> String {
    timestamp.to_rfc3339_opts(chrono::SecondsFormat::Secs, false)
}
