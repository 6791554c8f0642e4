// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Raw header block parsing
//!
//! A transport that follows redirects hands back one header section per hop,
//! concatenated and separated by a blank line. Only the last section (the
//! final hop) is authoritative; the earlier ones are discarded.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Separator between the header sections of consecutive hops
pub const BLOCK_SEPARATOR: &str = "\r\n\r\n";

/// Line terminator inside a header section
pub const LINE_TERMINATOR: &str = "\r\n";

/// Parsed header fields of a single header section
///
/// Names are stored exactly as received (whitespace-trimmed, casing kept).
/// A repeated name overwrites the earlier value but keeps its original
/// position, so iteration order is the order in which names first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderMap {
    fields: IndexMap<String, String>,
}

impl HeaderMap {
    /// Create an empty header map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing the value of an existing name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Look up a value by its exact name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Look up a value ignoring ASCII case
    ///
    /// When several names differ only in case, the one seen last wins.
    pub fn get_ignore_case(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Check whether a name is present (exact match)
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterate over `(name, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for HeaderMap {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut map = HeaderMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

/// Split a raw multi-hop header blob into its sections
///
/// The input is trimmed first, so an empty blob yields a single empty section.
pub fn split_header_blocks(raw: &str) -> Vec<&str> {
    raw.trim().split(BLOCK_SEPARATOR).collect()
}

/// Parse the header fields of one section
///
/// Each line is split on its first colon; lines without a colon (the status
/// line, garbage) are skipped.
pub fn parse_header_block(block: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();

    for line in block.split(LINE_TERMINATOR) {
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim(), value.trim());
        }
    }

    headers
}

/// Extract the header fields of the final hop from a raw header blob
///
/// Never fails: empty or malformed input degrades to an empty map.
///
/// # Example
///
/// ```
/// use headerscan::http::extract_final_headers;
///
/// let raw = "HTTP/1.1 301 Moved Permanently\r\nLocation: /new\r\n\r\n\
///            HTTP/1.1 200 OK\r\nX-Frame-Options: DENY\r\n\r\n";
/// let headers = extract_final_headers(raw);
///
/// assert_eq!(headers.get("X-Frame-Options"), Some("DENY"));
/// assert!(!headers.contains("Location"));
/// ```
pub fn extract_final_headers(raw: &str) -> HeaderMap {
    split_header_blocks(raw)
        .last()
        .map(|block| parse_header_block(block))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_block() {
        let headers =
            extract_final_headers("X-Frame-Options: DENY\r\nContent-Type: text/html\r\n\r\n");

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("X-Frame-Options"), Some("DENY"));
        assert_eq!(headers.get("Content-Type"), Some("text/html"));

        let names: Vec<&str> = headers.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["X-Frame-Options", "Content-Type"]);
    }

    #[test]
    fn test_only_last_block_counts() {
        let raw = "HTTP/1.1 302 Found\r\nLocation: /new\r\nServer: edge\r\n\r\n\
                   HTTP/1.1 301 Moved Permanently\r\nLocation: /newer\r\n\r\n\
                   HTTP/1.1 200 OK\r\nServer: origin\r\nReferrer-Policy: no-referrer\r\n\r\n";

        let headers = extract_final_headers(raw);

        assert_eq!(headers.get("Location"), None);
        assert_eq!(headers.get("Server"), Some("origin"));
        assert_eq!(headers.get("Referrer-Policy"), Some("no-referrer"));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_final_headers("").is_empty());
        assert!(extract_final_headers("  \r\n\r\n  ").is_empty());
    }

    #[test]
    fn test_block_without_colons() {
        let headers = extract_final_headers("HTTP/1.1 204 No Content\r\n\r\n");
        assert!(headers.is_empty());
    }

    #[test]
    fn test_malformed_line_skipped() {
        let raw = "HTTP/1.1 200 OK\r\nMalformed-Line-No-Colon\r\nX-Content-Type-Options: nosniff\r\n";
        let headers = extract_final_headers(raw);

        assert_eq!(headers.len(), 1);
        assert!(!headers.contains("Malformed-Line-No-Colon"));
        assert_eq!(headers.get("X-Content-Type-Options"), Some("nosniff"));
    }

    #[test]
    fn test_duplicate_name_last_wins() {
        let headers =
            extract_final_headers("X-Frame-Options: DENY\r\nX-Frame-Options: SAMEORIGIN\r\n\r\n");

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("X-Frame-Options"), Some("SAMEORIGIN"));
    }

    #[test]
    fn test_duplicate_keeps_first_position() {
        let headers = extract_final_headers("A: 1\r\nB: 2\r\nA: 3");
        let pairs: Vec<(&str, &str)> = headers.iter().collect();
        assert_eq!(pairs, vec![("A", "3"), ("B", "2")]);
    }

    #[test]
    fn test_split_on_first_colon_only() {
        let headers = extract_final_headers(
            "Content-Security-Policy:  default-src https://cdn.example.com:443  \r\n",
        );
        assert_eq!(
            headers.get("Content-Security-Policy"),
            Some("default-src https://cdn.example.com:443")
        );
    }

    #[test]
    fn test_name_casing_preserved() {
        let headers = extract_final_headers("  x-frame-options : DENY\r\n");

        assert_eq!(headers.get("x-frame-options"), Some("DENY"));
        assert_eq!(headers.get("X-Frame-Options"), None);
        assert_eq!(headers.get_ignore_case("X-Frame-Options"), Some("DENY"));
    }

    #[test]
    fn test_empty_value_is_kept() {
        let headers = extract_final_headers("X-Empty:\r\n");
        assert_eq!(headers.get("X-Empty"), Some(""));
    }

    #[test]
    fn test_no_separator_matches_direct_split() {
        let raw = "HTTP/2 200\r\nserver: nginx\r\ndate: Tue, 01 Jan 2030 00:00:00 GMT\r\nvia: 1.1 proxy";
        let expected: HeaderMap = raw
            .split("\r\n")
            .filter_map(|line| line.split_once(':'))
            .map(|(n, v)| (n.trim(), v.trim()))
            .collect();

        assert_eq!(extract_final_headers(raw), expected);
        assert_eq!(expected.get("date"), Some("Tue, 01 Jan 2030 00:00:00 GMT"));
    }

    #[test]
    fn test_split_header_blocks() {
        let blocks = split_header_blocks("\r\nA: 1\r\n\r\nB: 2\r\n\r\n");
        assert_eq!(blocks, vec!["A: 1", "B: 2"]);

        assert_eq!(split_header_blocks(""), vec![""]);
    }

    #[test]
    fn test_serializes_as_object() {
        let headers = extract_final_headers("B: 2\r\nA: 1");
        let json = serde_json::to_string(&headers).unwrap();
        assert_eq!(json, r#"{"B":"2","A":"1"}"#);
    }
}
