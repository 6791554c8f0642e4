// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # headerscan - HTTP Security Header Analyzer
//!
//! Fetches a URL, follows its redirects, and reports which security
//! headers the final response carries and which are missing.
//!
//! ## Features
//!
//! - Redirect aware: every hop's raw header section is kept, only the final
//!   hop is evaluated
//! - Pure core: header extraction and evaluation do no I/O and cannot fail
//! - Injectable policy: required header names and case matching are values,
//!   not globals
//! - Text and JSON output for terminals and CI pipelines
//!
//! ## Example
//!
//! ```rust,no_run
//! use headerscan::{HttpClient, Scanner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scanner = Scanner::new(HttpClient::new()?);
//!     let result = scanner.scan("https://example.com").await?;
//!
//!     for name in result.report.missing() {
//!         println!("Missing: {}", name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! The core can also be used on captured header text directly:
//!
//! ```rust
//! use headerscan::{evaluate, extract_final_headers, RequiredHeaders};
//!
//! let headers = extract_final_headers("X-Frame-Options: DENY\r\nContent-Type: text/html\r\n\r\n");
//! let report = evaluate(&headers, &RequiredHeaders::default());
//!
//! assert_eq!(report.missing_count(), 4);
//! assert!(!report.is_secure());
//! ```

pub mod error;
pub mod http;
pub mod render;
pub mod scanner;
pub mod security;

// Re-exports for convenience

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{extract_final_headers, HeaderMap, HttpClient, HttpClientConfig, RawResponse, Transport};

// Compliance
pub use security::{evaluate, ComplianceReport, HeaderStatus, MatchMode, RequiredHeaders};

// Scanning
pub use scanner::{normalize_url, ScanResult, Scanner};

// Output
pub use render::OutputFormat;

/// headerscan version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
