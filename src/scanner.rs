// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Scan pipeline: fetch, extract the final hop's headers, evaluate

use chrono::{DateTime, Local};
use url::Url;

use crate::error::{Error, Result};
use crate::http::{HeaderMap, Transport};
use crate::security::{evaluate, ComplianceReport, MatchMode, RequiredHeaders};

/// Everything known about one scanned URL
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// URL as requested (after scheme normalisation)
    pub requested_url: Url,
    /// Final URL after redirects
    pub url: Url,
    /// Final HTTP status code
    pub http_code: u16,
    /// URLs that redirected before the final one
    pub redirect_chain: Vec<Url>,
    /// All header fields of the final hop
    pub headers: HeaderMap,
    /// Compliance against the required policy
    pub report: ComplianceReport,
    /// When the scan finished
    pub timestamp: DateTime<Local>,
}

impl ScanResult {
    pub fn is_secure(&self) -> bool {
        self.report.is_secure()
    }
}

/// Scans URLs for required security headers
pub struct Scanner<T: Transport> {
    transport: T,
    policy: RequiredHeaders,
}

impl<T: Transport> Scanner<T> {
    /// Create a scanner with the default policy
    pub fn new(transport: T) -> Self {
        Self::with_policy(transport, RequiredHeaders::default())
    }

    pub fn with_policy(transport: T, policy: RequiredHeaders) -> Self {
        Self { transport, policy }
    }

    pub fn policy(&self) -> &RequiredHeaders {
        &self.policy
    }

    /// Fetch `target` and evaluate the final hop's headers
    ///
    /// A transport failure is returned as-is; no partial report is built.
    /// When the transport could not keep the received name casing, required
    /// names are matched ignoring case whatever the policy says.
    pub async fn scan(&self, target: &str) -> Result<ScanResult> {
        let requested_url = normalize_url(target)?;
        let response = self.transport.fetch(&requested_url).await?;

        let headers = response.final_headers();
        let relaxed;
        let policy = if response.name_case_preserved {
            &self.policy
        } else {
            relaxed = self.policy.clone().match_mode(MatchMode::IgnoreCase);
            &relaxed
        };
        let report = evaluate(&headers, policy);

        tracing::info!(
            url = %response.url,
            status = response.status_code(),
            redirects = response.redirect_chain.len(),
            missing = report.missing_count(),
            time_ms = response.response_time_ms,
            "Scan complete"
        );

        Ok(ScanResult {
            requested_url,
            http_code: response.status_code(),
            url: response.url,
            redirect_chain: response.redirect_chain,
            headers,
            report,
            timestamp: Local::now(),
        })
    }
}

/// Parse a target URL, assuming `http://` when no scheme is given
///
/// `example.com` and `localhost:8080` both become `http://` URLs; schemes
/// other than http and https are rejected.
pub fn normalize_url(target: &str) -> Result<Url> {
    let target = target.trim();
    let url = match Url::parse(target) {
        Ok(url) if url.has_host() || target.contains("://") => url,
        Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("http://{}", target))?
        }
        Err(e) => return Err(e.into()),
    };

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::UnsupportedScheme(scheme.to_string())),
    }
}
