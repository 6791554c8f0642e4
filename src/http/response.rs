// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Raw multi-hop response representation

use reqwest::StatusCode;
use url::Url;

use super::headers::{extract_final_headers, split_header_blocks, HeaderMap};

/// What a transport hands back after following redirects
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Header sections of every hop, blank-line separated, most recent last
    pub raw_headers: String,
    /// Final status code (after redirects)
    pub status: StatusCode,
    /// Final URL (after redirects)
    pub url: Url,
    /// URLs requested before the final one, in order
    pub redirect_chain: Vec<Url>,
    /// Total time in milliseconds
    pub response_time_ms: u64,
    /// Whether `raw_headers` keeps field names as the server cased them
    ///
    /// False when the transport only saw normalised (lowercase) names, in
    /// which case exact-case matching against them is meaningless.
    pub name_case_preserved: bool,
}

impl RawResponse {
    /// Create a new response
    pub fn new(raw_headers: impl Into<String>, status: StatusCode, url: Url) -> Self {
        Self {
            raw_headers: raw_headers.into(),
            status,
            url,
            redirect_chain: Vec::new(),
            response_time_ms: 0,
            name_case_preserved: true,
        }
    }

    /// Set the redirect chain
    pub fn with_redirect_chain(mut self, chain: Vec<Url>) -> Self {
        self.redirect_chain = chain;
        self
    }

    /// Set the response time
    pub fn with_response_time(mut self, ms: u64) -> Self {
        self.response_time_ms = ms;
        self
    }

    /// Mark the raw text as carrying lowercased field names
    pub fn with_lowercase_names(mut self) -> Self {
        self.name_case_preserved = false;
        self
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Whether any redirect was followed
    pub fn redirected(&self) -> bool {
        !self.redirect_chain.is_empty()
    }

    /// Number of header sections in the raw text
    pub fn hop_count(&self) -> usize {
        split_header_blocks(&self.raw_headers).len()
    }

    /// Header fields of the final hop
    pub fn final_headers(&self) -> HeaderMap {
        extract_final_headers(&self.raw_headers)
    }

    /// Get the final URL as string
    pub fn url_str(&self) -> &str {
        self.url.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_status() {
        let resp = RawResponse::new(
            "HTTP/1.1 200 OK\r\nServer: test\r\n\r\n",
            StatusCode::OK,
            Url::parse("https://example.com").unwrap(),
        );
        assert_eq!(resp.status_code(), 200);
        assert!(!resp.redirected());
        assert_eq!(resp.hop_count(), 1);
        assert_eq!(resp.url_str(), "https://example.com/");
        assert!(resp.name_case_preserved);
        assert!(!resp.with_lowercase_names().name_case_preserved);
    }

    #[test]
    fn test_final_headers_after_redirect() {
        let resp = RawResponse::new(
            "HTTP/1.1 301 Moved Permanently\r\nLocation: https://example.com/\r\n\r\n\
             HTTP/1.1 200 OK\r\nX-Frame-Options: DENY\r\n\r\n",
            StatusCode::OK,
            Url::parse("https://example.com").unwrap(),
        )
        .with_redirect_chain(vec![Url::parse("http://example.com").unwrap()]);

        assert!(resp.redirected());
        assert_eq!(resp.hop_count(), 2);

        let headers = resp.final_headers();
        assert_eq!(headers.get("X-Frame-Options"), Some("DENY"));
        assert!(!headers.contains("Location"));
    }
}
