// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! headerscan CLI - HTTP Security Header Analyzer
//!
//! Exit status is 0 whenever a response was evaluated, secure or not, and 1
//! when no response could be obtained.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use headerscan::render::{self, OutputFormat};
use headerscan::{HttpClient, HttpClientConfig, MatchMode, RequiredHeaders, Scanner};

/// Report which HTTP security headers a URL sends
#[derive(Debug, Parser)]
#[command(name = "headerscan", version, about)]
struct Args {
    /// URL to analyze (http:// is assumed when no scheme is given)
    url: String,

    /// Disable TLS certificate verification
    #[arg(long)]
    insecure: bool,

    /// Print a JSON document instead of the colored report
    #[arg(long)]
    json: bool,

    /// Also list every header of the final response
    #[arg(long = "headers-all")]
    headers_all: bool,

    /// Match required header names ignoring case
    #[arg(long)]
    ignore_case: bool,

    /// Required header name; repeat to replace the default set
    #[arg(long = "require", value_name = "NAME")]
    require: Vec<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 15, value_name = "SECS")]
    timeout: u64,

    /// Maximum redirects to follow
    #[arg(long, default_value_t = 10, value_name = "N")]
    max_redirects: usize,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    fn client_config(&self) -> HttpClientConfig {
        HttpClientConfig::new()
            .timeout(Duration::from_secs(self.timeout))
            .max_redirects(self.max_redirects)
            .accept_invalid_certs(self.insecure)
    }

    fn policy(&self) -> RequiredHeaders {
        let policy = if self.require.is_empty() {
            RequiredHeaders::default()
        } else {
            RequiredHeaders::new(self.require.iter().cloned())
        };

        if self.ignore_case {
            policy.match_mode(MatchMode::IgnoreCase)
        } else {
            policy
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("Failed to initialize logging: {:#}", e);
    }

    if args.no_color {
        colored::control::set_override(false);
    }

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Analysis failed");
            match args.format() {
                OutputFormat::Json => match render::error_to_json(&format!("{:#}", e)) {
                    Ok(json) => println!("{}", json),
                    Err(_) => eprintln!("Error: {:#}", e),
                },
                OutputFormat::Text => eprintln!("\n{} {:#}", "Error:".red(), e),
            }
            ExitCode::from(1)
        }
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    let format = args.format();

    let client = HttpClient::with_config(args.client_config())?;
    let scanner = Scanner::with_policy(client, args.policy());

    if format == OutputFormat::Text {
        print!(
            "{}",
            render::render_preamble(&args.url, args.insecure, args.headers_all)
        );
    }

    let result = scanner
        .scan(&args.url)
        .await
        .with_context(|| format!("Failed to analyze {}", args.url))?;

    match format {
        OutputFormat::Json => println!("{}", render::to_json(&result)?),
        OutputFormat::Text => print!("{}", render::render_report(&result, args.headers_all)),
    }

    Ok(())
}

/// Logs go to stderr so JSON on stdout stays parseable
fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let directive = if verbose {
        "headerscan=debug"
    } else {
        "headerscan=warn"
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
