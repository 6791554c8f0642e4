// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Security header compliance evaluation

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::policy::{MatchMode, RequiredHeaders};
use crate::http::HeaderMap;

/// Status of a single required header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderStatus {
    /// Header was received with this value
    Present(String),
    /// Header was not received
    Missing,
}

impl HeaderStatus {
    pub fn is_present(&self) -> bool {
        matches!(self, HeaderStatus::Present(_))
    }

    /// Received value, if any
    pub fn value(&self) -> Option<&str> {
        match self {
            HeaderStatus::Present(value) => Some(value.as_str()),
            HeaderStatus::Missing => None,
        }
    }
}

/// Result of checking a header map against a required header policy
///
/// Built once by [`evaluate`] and read-only afterwards. Every required name
/// appears exactly once in [`statuses`](Self::statuses), in policy order.
/// Deserializing reads only `security`; the rest is recomputed from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredReport")]
pub struct ComplianceReport {
    /// Required name -> received value (`null` when missing)
    security: IndexMap<String, Option<String>>,
    missing: Vec<String>,
    missing_count: usize,
    secure: bool,
}

/// Serialized form of a report as read back
#[derive(Deserialize)]
struct StoredReport {
    security: IndexMap<String, Option<String>>,
}

impl From<StoredReport> for ComplianceReport {
    fn from(stored: StoredReport) -> Self {
        ComplianceReport::from_security(stored.security)
    }
}

impl ComplianceReport {
    fn from_security(security: IndexMap<String, Option<String>>) -> Self {
        let missing: Vec<String> = security
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name.clone())
            .collect();
        let missing_count = missing.len();

        ComplianceReport {
            security,
            missing,
            missing_count,
            secure: missing_count == 0,
        }
    }

    /// Iterate `(name, status)` pairs in policy order
    pub fn statuses(&self) -> impl Iterator<Item = (&str, HeaderStatus)> + '_ {
        self.security.iter().map(|(name, value)| {
            let status = match value {
                Some(v) => HeaderStatus::Present(v.clone()),
                None => HeaderStatus::Missing,
            };
            (name.as_str(), status)
        })
    }

    /// Status of one required header, `None` if the name is not in the policy
    pub fn status(&self, name: &str) -> Option<HeaderStatus> {
        self.security.get(name).map(|value| match value {
            Some(v) => HeaderStatus::Present(v.clone()),
            None => HeaderStatus::Missing,
        })
    }

    /// Required name -> value-or-none map, in policy order
    pub fn security_headers(&self) -> &IndexMap<String, Option<String>> {
        &self.security
    }

    /// Required names that were not received, in policy order
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    pub fn missing_count(&self) -> usize {
        self.missing_count
    }

    /// True iff nothing is missing
    pub fn is_secure(&self) -> bool {
        self.secure
    }
}

/// Check received headers against the required policy
///
/// Total over any input: an empty map yields a report with every required
/// header missing.
pub fn evaluate(headers: &HeaderMap, required: &RequiredHeaders) -> ComplianceReport {
    let mut security = IndexMap::with_capacity(required.len());

    for name in required.names() {
        let value = match required.mode() {
            MatchMode::Exact => headers.get(name),
            MatchMode::IgnoreCase => headers.get_ignore_case(name),
        };
        security.insert(name.clone(), value.map(str::to_string));
    }

    ComplianceReport::from_security(security)
}
