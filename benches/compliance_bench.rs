// Copyright (c) 2026 Bountyy Oy. All rights reserved.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use headerscan::{evaluate, extract_final_headers, RequiredHeaders};

const REDIRECTED: &str = "HTTP/1.1 301 Moved Permanently\r\n\
    Location: https://example.com/\r\n\
    Server: edge\r\n\r\n\
    HTTP/1.1 302 Found\r\n\
    Location: https://www.example.com/\r\n\r\n\
    HTTP/2 200\r\n\
    Content-Type: text/html; charset=utf-8\r\n\
    Content-Security-Policy: default-src 'self'; script-src 'self' https://cdn.example.com\r\n\
    Strict-Transport-Security: max-age=63072000; includeSubDomains; preload\r\n\
    X-Frame-Options: DENY\r\n\
    X-Content-Type-Options: nosniff\r\n\
    Cache-Control: no-store\r\n\
    Set-Cookie: session=abc; Secure; HttpOnly\r\n\
    Set-Cookie: theme=dark\r\n\r\n";

fn extraction_benchmark(c: &mut Criterion) {
    c.bench_function("extract_final_headers", |b| {
        b.iter(|| black_box(extract_final_headers(black_box(REDIRECTED))))
    });
}

fn evaluation_benchmark(c: &mut Criterion) {
    let headers = extract_final_headers(REDIRECTED);
    let policy = RequiredHeaders::default();

    c.bench_function("evaluate", |b| {
        b.iter(|| black_box(evaluate(black_box(&headers), &policy)))
    });
}

criterion_group!(benches, extraction_benchmark, evaluation_benchmark);
criterion_main!(benches);
