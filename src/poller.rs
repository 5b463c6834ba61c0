// src/poller.rs
//
// Owns the job list and its loading/error flags for the lifetime of one view.
//
// - start(): first fetch + arm the refresh timer
// - refresh(): manual refresh / retry
// - tick(): drain finished fetches, fire the timer when due
// - stop() / Drop: disarm the timer, drop in-flight results
//
// Fetches run on short-lived worker threads and report back over a channel.
// Each carries a sequence number; only the newest request's answer is applied.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::config::consts::REFRESH_INTERVAL_SECS;
use crate::data::JobList;
use crate::job::JobRecord;
use crate::net::{FetchError, JobSource};
use crate::progress::Progress;

/// What the view renders.
#[derive(Clone, Debug, Default)]
pub struct JobsState {
    pub jobs: JobList,
    pub loading: bool,
    pub error: Option<String>,
    pub last_update: Option<DateTime<Utc>>,
}

struct Outcome {
    seq: u64,
    result: Result<Vec<JobRecord>, FetchError>,
}

pub struct Poller {
    source: Arc<dyn JobSource>,
    progress: Arc<dyn Progress>,
    interval: Duration,

    state: JobsState,

    tx: Sender<Outcome>,
    rx: Receiver<Outcome>,

    /// Sequence number of the most recently issued fetch
    issued: u64,
    /// Next timer deadline; `None` = stopped
    next_due: Option<Instant>,
}

impl Poller {
    pub fn new(source: Arc<dyn JobSource>, progress: Arc<dyn Progress>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            progress,
            interval: Duration::from_secs(REFRESH_INTERVAL_SECS),
            state: JobsState::default(),
            tx,
            rx,
            issued: 0,
            next_due: None,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /* ---------- lifecycle ---------- */

    /// Fetch now and every `interval` after `now`. No-op if already running.
    pub fn start(&mut self, now: Instant) {
        if self.is_running() { return; }
        logf!("Poller: start (every {}s)", self.interval.as_secs());
        self.next_due = Some(now + self.interval);
        self.refresh();
    }

    /// Disarm the timer. Fetches still in flight finish into a dropped channel.
    pub fn stop(&mut self) {
        if !self.is_running() && !self.state.loading { return; }
        logf!("Poller: stop");
        self.next_due = None;
        self.state.loading = false;
        let (tx, rx) = mpsc::channel();
        self.tx = tx;
        self.rx = rx;
    }

    pub fn is_running(&self) -> bool { self.next_due.is_some() }

    /* ---------- fetching ---------- */

    /// Issue a fetch. The current list stays visible while it runs.
    pub fn refresh(&mut self) {
        self.issued += 1;
        let seq = self.issued;
        self.state.loading = true;

        let tx = self.tx.clone();
        let source = Arc::clone(&self.source);
        let progress = Arc::clone(&self.progress);

        progress.begin(seq);
        logd!("Poller: fetch #{} issued", seq);

        let spawned = thread::Builder::new()
            .name(format!("fetch-{seq}"))
            .spawn(move || {
                let result = source.fetch_latest();
                // Receiver gone = poller stopped or dropped.
                let _ = tx.send(Outcome { seq, result });
                progress.finish(seq);
            });

        if let Err(e) = spawned {
            loge!("Poller: could not spawn fetch #{}: {}", seq, e);
            self.state.loading = false;
            self.state.error = Some(format!("Failed to fetch jobs: {e}"));
        }
    }

    /// Apply finished fetches and fire the timer if due.
    /// Returns time left until the next timer deadline (None when stopped).
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        while let Ok(outcome) = self.rx.try_recv() {
            self.apply(outcome, Utc::now());
        }

        if let Some(due) = self.next_due {
            if now >= due {
                logd!("Poller: timer fired");
                self.next_due = Some(now + self.interval);
                self.refresh();
            }
        }

        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    fn apply(&mut self, outcome: Outcome, at: DateTime<Utc>) {
        if outcome.seq != self.issued {
            logd!("Poller: discarding stale fetch #{} (latest #{})", outcome.seq, self.issued);
            return;
        }

        self.state.loading = false;
        match outcome.result {
            Ok(jobs) => {
                logf!("Poller: fetch #{} OK, {} job(s)", outcome.seq, jobs.len());
                self.state.jobs.replace(jobs);
                self.state.last_update = Some(at);
                self.state.error = None;
                self.progress.log("Ready");
            }
            Err(e) => {
                loge!("Poller: fetch #{} failed: {}", outcome.seq, e);
                let msg = e.to_string();
                self.progress.log(&msg);
                self.state.error = Some(msg);
            }
        }
    }

    /* ---------- read access ---------- */

    pub fn state(&self) -> &JobsState { &self.state }
    pub fn jobs(&self) -> &JobList { &self.state.jobs }
    pub fn is_loading(&self) -> bool { self.state.loading }
    pub fn error(&self) -> Option<&str> { self.state.error.as_deref() }
    pub fn last_update(&self) -> Option<DateTime<Utc>> { self.state.last_update }
    pub fn interval(&self) -> Duration { self.interval }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}
