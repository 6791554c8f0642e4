// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Required security header policy

use serde::{Deserialize, Serialize};

pub const CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";
pub const STRICT_TRANSPORT_SECURITY: &str = "Strict-Transport-Security";
pub const X_FRAME_OPTIONS: &str = "X-Frame-Options";
pub const X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
pub const REFERRER_POLICY: &str = "Referrer-Policy";

/// Headers every response is expected to carry, in report order
pub const DEFAULT_REQUIRED_HEADERS: [&str; 5] = [
    CONTENT_SECURITY_POLICY,
    STRICT_TRANSPORT_SECURITY,
    X_FRAME_OPTIONS,
    X_CONTENT_TYPE_OPTIONS,
    REFERRER_POLICY,
];

/// How required names are matched against received names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Byte-for-byte comparison; `content-security-policy` does not satisfy
    /// `Content-Security-Policy`
    #[default]
    Exact,
    /// ASCII case-insensitive comparison, as HTTP defines field names
    IgnoreCase,
}

/// Ordered set of header names a response must carry
///
/// Names are unique; constructing from a list drops later duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredHeaders {
    names: Vec<String>,
    match_mode: MatchMode,
}

impl Default for RequiredHeaders {
    fn default() -> Self {
        Self::new(DEFAULT_REQUIRED_HEADERS)
    }
}

impl RequiredHeaders {
    /// Create a policy from an ordered list of names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into().trim().to_string();
            if !name.is_empty() && !unique.contains(&name) {
                unique.push(name);
            }
        }

        Self {
            names: unique,
            match_mode: MatchMode::default(),
        }
    }

    /// Set the name matching mode
    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Required names in report order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
