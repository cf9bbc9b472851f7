//! End to end: write a HAR file, load it, and render the failed-request report.

use hartriage_core::config::TriageConfig;
use hartriage_core::har::{self, FailureFilter, HarError};
use hartriage_core::report::write_report;
use std::io::Write;
use tempfile::NamedTempFile;

fn har_file(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

fn report_for(f: &NamedTempFile, filter: FailureFilter) -> String {
    let capture = har::load_capture(f.path()).expect("load capture");
    let mut buf = Vec::new();
    write_report(&mut buf, &capture, filter).expect("write report");
    String::from_utf8(buf).unwrap()
}

#[test]
fn browser_export_with_mixed_statuses() {
    let long_body = "x".repeat(450);
    let har = format!(
        r#"{{
            "log": {{
                "version": "1.2",
                "creator": {{ "name": "Firefox", "version": "128.0" }},
                "pages": [],
                "entries": [
                    {{
                        "startedDateTime": "2026-01-10T10:00:00.000Z",
                        "time": 12.5,
                        "request": {{ "method": "GET", "url": "https://shop.example.com/", "httpVersion": "HTTP/2", "headers": [], "queryString": [], "cookies": [] }},
                        "response": {{ "status": 200, "statusText": "OK", "headers": [], "content": {{ "size": 5, "mimeType": "text/html", "text": "<p/>" }} }}
                    }},
                    {{
                        "startedDateTime": "2026-01-10T10:00:01.000Z",
                        "time": 80.0,
                        "request": {{ "method": "POST", "url": "https://api.example.com/auth/login", "headers": [] }},
                        "response": {{ "status": 401, "statusText": "Unauthorized", "headers": [], "content": {{ "mimeType": "application/json", "text": "{{\"message\":\"Unauthorized\"}}" }} }}
                    }},
                    {{
                        "startedDateTime": "2026-01-10T10:00:02.000Z",
                        "time": 300.0,
                        "request": {{ "method": "GET", "url": "https://api.example.com/products?q=cabo", "headers": [] }},
                        "response": {{ "status": 500, "statusText": "Internal Server Error", "headers": [], "content": {{ "mimeType": "text/plain", "text": "{long_body}" }} }}
                    }},
                    {{
                        "startedDateTime": "2026-01-10T10:00:03.000Z",
                        "time": 5.0,
                        "request": {{ "method": "GET", "url": "https://cdn.example.com/missing.png", "headers": [] }},
                        "response": {{ "status": 404, "statusText": "Not Found", "headers": [], "content": {{ "size": 0, "mimeType": "image/png" }} }}
                    }}
                ]
            }}
        }}"#
    );
    let f = har_file(&har);
    let out = report_for(&f, FailureFilter::default());

    assert!(out.starts_with("Total entries: 4\nFound 3 failed requests:\n"));
    assert!(!out.contains("https://shop.example.com/"));
    assert!(out.contains("Method: POST\nURL: https://api.example.com/auth/login\nStatus: 401 Unauthorized\nResponse: {\"message\":\"Unauthorized\"}\n"));
    assert!(out.contains(&format!("Response: {}...\n", "x".repeat(200))));
    assert!(out.contains("Status: 404 Not Found\nResponse: Could not read content\n"));

    let login = out.find("auth/login").unwrap();
    let products = out.find("products?q=cabo").unwrap();
    let missing = out.find("missing.png").unwrap();
    assert!(login < products && products < missing);
}

#[test]
fn config_threshold_flows_into_report() {
    let f = har_file(
        r#"{"log":{"entries":[
            {"request":{"method":"GET","url":"https://a/404"},"response":{"status":404,"statusText":"Not Found","content":{"text":"abcdef"}}},
            {"request":{"method":"GET","url":"https://a/503"},"response":{"status":503,"statusText":"Service Unavailable","content":{"text":"abcdef"}}}
        ]}}"#,
    );
    let cfg = TriageConfig {
        min_failure_status: 500,
        max_snippet_chars: 3,
    };
    let out = report_for(&f, cfg.failure_filter());
    assert!(out.contains("Found 1 failed requests:"));
    assert!(out.contains("URL: https://a/503"));
    assert!(out.contains("Response: abc...\n"));
    assert!(!out.contains("https://a/404"));
}

#[test]
fn all_successful_reports_none_found() {
    let f = har_file(
        r#"{"log":{"entries":[
            {"request":{"method":"GET","url":"https://a/"},"response":{"status":200}},
            {"request":{"method":"GET","url":"https://a/r"},"response":{"status":304}}
        ]}}"#,
    );
    let out = report_for(&f, FailureFilter::default());
    assert_eq!(
        out,
        "Total entries: 2\nNo failed requests found (status >= 400).\n"
    );
}

#[test]
fn malformed_file_is_an_error_not_a_panic() {
    let f = har_file("<html>not a har</html>");
    let err = har::load_capture(f.path()).unwrap_err();
    assert!(matches!(err, HarError::Format { .. }));
}
