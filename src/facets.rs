// src/facets.rs
use std::collections::BTreeSet;

use crate::job::JobRecord;

/// Distinct values that populate the location/company combo boxes.
/// The "All ..." entry is the UI's job, not part of this.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Facets {
    pub locations: Vec<String>,
    pub companies: Vec<String>,
}

impl Facets {
    pub fn from_jobs(jobs: &[JobRecord]) -> Self {
        Self {
            locations: unique_sorted(jobs.iter().map(|j| j.location.as_str())),
            companies: unique_sorted(jobs.iter().map(|j| j.company.as_str())),
        }
    }
}

/// Ascending, each value once.
pub fn unique_sorted<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}
