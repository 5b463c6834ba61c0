// tests/cli_export.rs
#![cfg(feature = "cli")]

use clap::Parser;
use seek_dash::cli::{run_with, Args};
use seek_dash::config::options::ExportOptions;
use seek_dash::file::export_date;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BODY: &str = r#"[
  {"title": "Rust Engineer", "company": "Acme", "location": "Sydney NSW",
   "url": "https://x/1", "scraped_at": "2025-10-14T10:30:00Z"},
  {"title": "Nurse", "company": "Health Co", "location": "Perth WA",
   "url": "https://x/2", "scraped_at": "2025-10-13T08:00:00Z"}
]"#;

#[test]
fn args_build_the_filter() {
    let args = Args::try_parse_from(["jobs_cli", "-s", "rust", "-l", "Sydney NSW", "--stdout"]).unwrap();
    let f = args.filter();
    assert_eq!(f.search, "rust");
    assert_eq!(f.location, "Sydney NSW");
    assert_eq!(f.company, "");
    assert!(args.stdout);
}

#[tokio::test(flavor = "multi_thread")]
async fn exports_filtered_jobs_to_dated_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(BODY, "application/json"))
        .mount(&server)
        .await;

    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().to_path_buf();
    let uri = server.uri();
    let args = Args::try_parse_from([
        "jobs_cli",
        "--api-url",
        uri.as_str(),
        "--company",
        "Acme",
        "--out",
        out.to_str().unwrap(),
    ])
    .unwrap();

    tokio::task::spawn_blocking(move || run_with(&args))
        .await
        .unwrap()
        .unwrap();

    let written = out.join(ExportOptions::file_name_for(export_date()));
    let content = std::fs::read_to_string(written).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains(r#""Rust Engineer","Acme""#));
    assert!(!content.contains("Nurse"));
}
