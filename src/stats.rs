// src/stats.rs
use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use crate::job::JobRecord;

/// Numbers for the stats bar. Always over the unfiltered list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JobStats {
    pub total: usize,
    pub last_24h: usize,
    pub companies: usize,
}

impl JobStats {
    pub fn compute(jobs: &[JobRecord], now: DateTime<Utc>) -> Self {
        let day_ago = now - Duration::hours(24);
        let last_24h = jobs
            .iter()
            .filter_map(JobRecord::scraped_at_utc)
            .filter(|ts| *ts > day_ago)
            .count();
        let companies = jobs
            .iter()
            .map(|j| j.company.as_str())
            .collect::<HashSet<_>>()
            .len();

        Self { total: jobs.len(), last_24h, companies }
    }
}
