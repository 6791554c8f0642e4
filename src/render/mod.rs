// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Output formats for scan results
//!
//! Rendering only reads a finished [`ScanResult`](crate::scanner::ScanResult);
//! it never touches the network.

pub mod json;
pub mod text;

pub use json::{error_to_json, to_json};
pub use text::{render_preamble, render_report};

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Colored terminal report
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}
