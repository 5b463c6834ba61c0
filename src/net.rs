// src/net.rs
//
// Where job batches come from. The dashboard only needs "give me the latest
// list"; the HTTP client is one implementation, tests plug in their own.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use thiserror::Error;

use crate::config::consts::USER_AGENT;
use crate::config::options::ApiOptions;
use crate::job::JobRecord;

/// The one failure the dashboard models. Every variant ends up as a single
/// message next to a Retry button.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch jobs: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to fetch jobs (HTTP {status})")]
    Status { status: u16 },
    #[error("Failed to fetch jobs: unexpected response ({0})")]
    Decode(#[from] serde_json::Error),
}

/// Blocking fetch of the latest batch. Called from a worker thread.
pub trait JobSource: Send + Sync {
    fn fetch_latest(&self) -> Result<Vec<JobRecord>, FetchError>;
}

/// `GET {API_URL}/api/v1/jobs/latest?limit=100`
#[derive(Debug, Clone)]
pub struct HttpJobSource {
    client: Client,
    api: ApiOptions,
}

impl HttpJobSource {
    pub fn new(api: ApiOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(api.timeout)
            .build()?;
        Ok(Self { client, api })
    }

    pub fn api(&self) -> &ApiOptions { &self.api }
}

impl JobSource for HttpJobSource {
    fn fetch_latest(&self) -> Result<Vec<JobRecord>, FetchError> {
        let url = self.api.latest_jobs_url();
        logd!("Fetch: GET {}", url);

        let resp = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            logw!("Fetch: {} returned {}", url, status);
            return Err(FetchError::Status { status: status.as_u16() });
        }

        let body = resp.text()?;
        let jobs: Vec<JobRecord> = serde_json::from_str(&body)?;
        logf!("Fetch: OK {} job(s)", jobs.len());
        Ok(jobs)
    }
}
