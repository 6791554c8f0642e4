// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport abstraction
//!
//! The scanner only needs one opaque call that either returns every hop's
//! raw header text or fails. Anything that can do that is a [`Transport`].

use async_trait::async_trait;
use url::Url;

use super::response::RawResponse;
use crate::error::Result;

/// Fetches a URL, following redirects
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use headerscan::http::{RawResponse, Transport};
/// use headerscan::Result;
/// use url::Url;
///
/// struct Canned;
///
/// #[async_trait]
/// impl Transport for Canned {
///     async fn fetch(&self, url: &Url) -> Result<RawResponse> {
///         Ok(RawResponse::new(
///             "HTTP/1.1 200 OK\r\nX-Frame-Options: DENY\r\n\r\n",
///             reqwest::StatusCode::OK,
///             url.clone(),
///         ))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and return the raw headers of all hops
    ///
    /// Failing to obtain any response (DNS, connect, TLS, timeout) is an
    /// error; no partial response is returned.
    async fn fetch(&self, url: &Url) -> Result<RawResponse>;
}
