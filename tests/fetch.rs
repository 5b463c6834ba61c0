// tests/fetch.rs
//
// HttpJobSource against a local mock server.
//
use seek_dash::config::options::ApiOptions;
use seek_dash::net::{FetchError, HttpJobSource, JobSource};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BODY: &str = r#"[
  {
    "job_id": "1",
    "title": "Rust Engineer",
    "company": "Acme",
    "location": "Sydney NSW",
    "salary": "$150k",
    "job_type": "Full time",
    "job_url": "https://www.seek.com.au/job/1",
    "url": "https://www.seek.com.au/job/1",
    "scraped_at": "2025-10-14T10:30:00Z"
  },
  {
    "job_id": null,
    "url": null,
    "title": "Nurse",
    "company": "Health Co",
    "location": "Perth WA",
    "scraped_at": "2025-10-13T08:00:00Z"
  }
]"#;

/// The blocking client can't run on the async test runtime's own threads.
async fn fetch(base: String) -> Result<Vec<seek_dash::job::JobRecord>, FetchError> {
    tokio::task::spawn_blocking(move || {
        let source = HttpJobSource::new(ApiOptions::new(&base))?;
        source.fetch_latest()
    })
    .await
    .expect("fetch task panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn fetches_latest_with_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs/latest"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(BODY, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let jobs = fetch(server.uri()).await.unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].title, "Rust Engineer");
    assert_eq!(jobs[0].salary.as_deref(), Some("$150k"));
    assert_eq!(jobs[1].job_id, "");
    assert_eq!(jobs[1].url, "");
    assert_eq!(jobs[1].salary, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs/latest"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = fetch(server.uri()).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 500 }));
    assert_eq!(err.to_string(), "Failed to fetch jobs (HTTP 500)");
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let err = fetch(server.uri()).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_server_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let err = fetch(format!("http://{addr}")).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
    assert!(err.to_string().starts_with("Failed to fetch jobs:"));
}
