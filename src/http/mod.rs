// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for headerscan
//!
//! Fetches a URL hop by hop, keeps the raw header text of every hop and
//! parses the final hop's header section.

mod client;
mod headers;
mod response;
mod transport;

pub use client::{render_header_block, HttpClient, HttpClientConfig};
pub use headers::{
    extract_final_headers, parse_header_block, split_header_blocks, HeaderMap, BLOCK_SEPARATOR,
    LINE_TERMINATOR,
};
pub use response::RawResponse;
pub use transport::Transport;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("headerscan/", env!("CARGO_PKG_VERSION"));
