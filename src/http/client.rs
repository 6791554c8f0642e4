// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation
//!
//! Redirects are followed by hand so that the header section of every hop
//! can be recorded, not just the final one.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap as WireHeaders, HeaderValue, LOCATION};
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode, Version};
use url::Url;

use super::response::RawResponse;
use super::transport::Transport;
use super::DEFAULT_USER_AGENT;
use crate::error::{Error, Result};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Timeout for the whole redirect chain
    pub timeout: Duration,
    /// Maximum redirects to follow
    pub max_redirects: usize,
    /// Accept invalid certificates (dangerous!)
    pub accept_invalid_certs: bool,
    /// Headers sent with every request
    pub default_headers: WireHeaders,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        let mut default_headers = WireHeaders::new();
        default_headers.insert(
            "accept",
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        default_headers.insert(
            "accept-language",
            HeaderValue::from_static("en-US,en;q=0.5"),
        );

        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(15),
            max_redirects: 10,
            accept_invalid_certs: false,
            default_headers,
        }
    }
}

impl HttpClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the redirect limit
    pub fn max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = max;
        self
    }

    /// Skip TLS certificate verification
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

/// HTTP client that records every hop's headers
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(Policy::none())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .default_headers(config.default_headers.clone())
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// GET `url`, following redirects up to the configured limit
    ///
    /// The configured timeout bounds the whole chain, not each hop.
    pub async fn get(&self, url: &Url) -> Result<RawResponse> {
        match tokio::time::timeout(self.config.timeout, self.follow_redirects(url)).await {
            Ok(result) => result,
            Err(_) => Err(Error::timeout_with_url(
                "request",
                self.config.timeout.as_millis() as u64,
                url.as_str(),
            )),
        }
    }

    async fn follow_redirects(&self, url: &Url) -> Result<RawResponse> {
        let start = Instant::now();
        let mut current = url.clone();
        let mut chain: Vec<Url> = Vec::new();
        let mut raw_headers = String::new();

        loop {
            tracing::debug!(url = %current, hop = chain.len(), "Requesting");

            let response = self
                .client
                .get(current.clone())
                .send()
                .await
                .map_err(|e| self.transport_error(e, &current))?;

            let status = response.status();
            raw_headers.push_str(&render_header_block(
                response.version(),
                status,
                response.headers(),
            ));

            let Some(location) = redirect_location(status, response.headers(), &current) else {
                let response_time = start.elapsed().as_millis() as u64;
                // reqwest hands names back lowercased
                return Ok(RawResponse::new(raw_headers, status, current)
                    .with_redirect_chain(chain)
                    .with_response_time(response_time)
                    .with_lowercase_names());
            };

            if chain.len() >= self.config.max_redirects {
                return Err(Error::TooManyRedirects {
                    url: url.to_string(),
                    limit: self.config.max_redirects,
                });
            }

            let next = current.join(&location)?;
            tracing::debug!(from = %current, to = %next, status = status.as_u16(), "Following redirect");
            chain.push(std::mem::replace(&mut current, next));
        }
    }

    fn transport_error(&self, err: reqwest::Error, url: &Url) -> Error {
        if err.is_timeout() {
            Error::timeout_with_url(
                "request",
                self.config.timeout.as_millis() as u64,
                url.as_str(),
            )
        } else if err.is_connect() {
            Error::connect(url.as_str(), crate::error::describe_chain(&err))
        } else {
            Error::Http(err)
        }
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn fetch(&self, url: &Url) -> Result<RawResponse> {
        self.get(url).await
    }
}

/// Location of a redirect this client follows, if any
fn redirect_location(status: StatusCode, headers: &WireHeaders, current: &Url) -> Option<String> {
    if !matches!(status.as_u16(), 301 | 302 | 303 | 307 | 308) {
        return None;
    }

    match headers.get(LOCATION).map(|v| v.to_str()) {
        Some(Ok(location)) => Some(location.to_string()),
        Some(Err(_)) => {
            tracing::warn!(url = %current, status = status.as_u16(), "Redirect Location is not valid text");
            None
        }
        None => {
            tracing::warn!(url = %current, status = status.as_u16(), "Redirect status without Location header");
            None
        }
    }
}

/// Render one hop as a raw header section terminated by a blank line
///
/// Names are written as the client received them (lowercase). Repeated
/// fields become repeated lines.
pub fn render_header_block(version: Version, status: StatusCode, headers: &WireHeaders) -> String {
    let mut block = format!("{:?} {}\r\n", version, status);

    for (name, value) in headers {
        block.push_str(name.as_str());
        block.push_str(": ");
        block.push_str(&String::from_utf8_lossy(value.as_bytes()));
        block.push_str("\r\n");
    }

    block.push_str("\r\n");
    block
}
