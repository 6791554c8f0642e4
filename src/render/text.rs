// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Human-readable terminal report

use colored::Colorize;

use crate::scanner::ScanResult;
use crate::security::HeaderStatus;

/// Column width for header names
const NAME_WIDTH: usize = 35;

/// Banner, target and active modes, printed before the request is made
pub fn render_preamble(target: &str, insecure: bool, show_all: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "--- HTTP Security Header Analyzer ---".cyan()));
    out.push_str(&format!("Analyzing: {}\n", target.cyan()));
    if insecure {
        out.push_str(&format!(
            "{}\n",
            "(Warning: TLS certificate verification disabled - insecure mode)".yellow()
        ));
    }
    if show_all {
        out.push_str(&format!("{}\n", "(Showing all HTTP headers)".cyan()));
    }

    out
}

/// Full compliance report for a finished scan
pub fn render_report(result: &ScanResult, show_all: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "--- Security Compliance Report ---".cyan()));
    for (name, status) in result.report.statuses() {
        out.push_str(&render_status(name, &status));
    }

    out.push_str(&format!("\n{}\n", "--- Summary ---".cyan()));
    out.push_str(&format!(
        "Final HTTP status: {}\n",
        result.http_code.to_string().yellow()
    ));
    out.push_str(&format!(
        "Final URL (after redirects): {}\n",
        result.url.as_str().cyan()
    ));
    if !result.redirect_chain.is_empty() {
        out.push_str(&format!("Redirects followed: {}\n", result.redirect_chain.len()));
    }

    let missing = result.report.missing_count();
    if missing == 0 {
        out.push_str(&format!(
            "{}\n",
            "Result: all critical security headers were detected.".green()
        ));
    } else {
        out.push_str(&format!(
            "{} {} security header(s) missing.\n",
            "Warning:".yellow(),
            missing
        ));
        out.push_str(
            "Recommendation: add the missing headers to mitigate risks such as XSS and clickjacking.\n",
        );
    }

    if show_all {
        out.push_str(&format!("\n{}\n", "--- All HTTP Headers ---".cyan()));
        for (name, value) in result.headers.iter() {
            out.push_str(&format!("{:<width$} : {}\n", name, value, width = NAME_WIDTH));
        }
    }

    out.push_str(&format!("\n{}\n", "End of analysis.".cyan()));
    out
}

/// One line per required header
fn render_status(name: &str, status: &HeaderStatus) -> String {
    match status {
        HeaderStatus::Present(value) => format!(
            "  {} {:<width$} : {}\n",
            "[PRESENT]".green(),
            name,
            value,
            width = NAME_WIDTH
        ),
        HeaderStatus::Missing => format!(
            "  {} {:<width$} : Recommended for security.\n",
            "[MISSING]".red(),
            name,
            width = NAME_WIDTH
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::extract_final_headers;
    use crate::security::{evaluate, RequiredHeaders};
    use chrono::Local;
    use url::Url;

    fn scan_result(raw: &str, redirects: usize) -> ScanResult {
        let headers = extract_final_headers(raw);
        let report = evaluate(&headers, &RequiredHeaders::default());
        ScanResult {
            requested_url: Url::parse("http://example.com").unwrap(),
            url: Url::parse("https://example.com/").unwrap(),
            http_code: 200,
            redirect_chain: vec![Url::parse("http://example.com").unwrap(); redirects],
            headers,
            report,
            timestamp: Local::now(),
        }
    }

    #[test]
    fn test_status_lines() {
        let present = render_status("X-Frame-Options", &HeaderStatus::Present("DENY".into()));
        assert!(present.contains("[PRESENT]"));
        assert!(present.contains(&format!("{:<35} : DENY", "X-Frame-Options")));

        let missing = render_status("Referrer-Policy", &HeaderStatus::Missing);
        assert!(missing.contains("[MISSING]"));
        assert!(missing.contains("Recommended for security."));
    }

    #[test]
    fn test_report_insecure() {
        let text = render_report(&scan_result("X-Frame-Options: DENY", 1), false);

        assert_eq!(text.matches("[MISSING]").count(), 4);
        assert_eq!(text.matches("[PRESENT]").count(), 1);
        assert!(text.contains("4 security header(s) missing."));
        assert!(text.contains("Redirects followed: 1"));
        assert!(text.contains("https://example.com/"));
        assert!(!text.contains("All HTTP Headers"));
    }

    #[test]
    fn test_report_secure_with_all_headers() {
        let raw = "Content-Security-Policy: default-src 'self'\r\n\
                   Strict-Transport-Security: max-age=31536000\r\n\
                   X-Frame-Options: DENY\r\n\
                   X-Content-Type-Options: nosniff\r\n\
                   Referrer-Policy: no-referrer\r\n\
                   Server: nginx";
        let text = render_report(&scan_result(raw, 0), true);

        assert!(text.contains("all critical security headers were detected"));
        assert!(!text.contains("[MISSING]"));
        assert!(!text.contains("Redirects followed"));
        assert!(text.contains("All HTTP Headers"));
        assert!(text.contains(&format!("{:<35} : nginx", "Server")));
    }

    #[test]
    fn test_preamble_modes() {
        let plain = render_preamble("https://example.com", false, false);
        assert!(plain.contains("https://example.com"));
        assert!(!plain.contains("insecure mode"));

        let both = render_preamble("https://example.com", true, true);
        assert!(both.contains("insecure mode"));
        assert!(both.contains("Showing all HTTP headers"));
    }
}
