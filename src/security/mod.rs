// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Security header compliance
//!
//! - Required header policy
//! - Presence evaluation and reporting

mod compliance;
mod policy;

pub use compliance::{evaluate, ComplianceReport, HeaderStatus};
pub use policy::{
    MatchMode, RequiredHeaders, CONTENT_SECURITY_POLICY, DEFAULT_REQUIRED_HEADERS,
    REFERRER_POLICY, STRICT_TRANSPORT_SECURITY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
};
