// src/data.rs
//
// Light wrappers around the canonical job list and its filtered view.
//
// - JobList: the last successfully fetched batch. Replaced wholesale on every
//            refresh; nothing else mutates it.
// - JobView: derived (view) data, row indexes into a JobList after applying
//            the current JobFilter. Rebuilt each frame; O(n).

use crate::filter::{self, JobFilter};
use crate::job::JobRecord;

/// Authoritative, canonical job batch.
#[derive(Clone, Debug, Default)]
pub struct JobList {
    jobs: Vec<JobRecord>,
}

impl JobList {
    pub fn new(jobs: Vec<JobRecord>) -> Self { Self { jobs } }

    /// Read-only view of the batch.
    pub fn jobs(&self) -> &[JobRecord] { &self.jobs }

    pub fn len(&self) -> usize { self.jobs.len() }
    pub fn is_empty(&self) -> bool { self.jobs.is_empty() }

    /// Full replace. No merge, no diff against the previous batch.
    pub fn replace(&mut self, jobs: Vec<JobRecord>) {
        self.jobs = jobs;
    }
}

/// Zero-copy filtered view for display and export.
/// Holds list of row indexes into the JobList.
#[derive(Clone, Debug)]
pub struct JobView<'a> {
    /// Positions of kept rows in the canonical list
    pub row_ix: Vec<usize>,
    /// Borrowed pointer to the canonical list
    raw: &'a [JobRecord],
}

impl<'a> JobView<'a> {
    /// Build a filtered view; an empty filter keeps every row.
    pub fn new(list: &'a JobList, filter: &JobFilter) -> Self {
        let raw = list.jobs();
        if filter.is_empty() {
            return Self { row_ix: (0..raw.len()).collect(), raw };
        }
        Self { row_ix: filter::filter_indices(raw, filter), raw }
    }

    /// Number of rows in the projection.
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Size of the list this view was taken from.
    pub fn total(&self) -> usize { self.raw.len() }

    /// Borrow a single job by projected index (no cloning).
    pub fn job(&self, i: usize) -> Option<&'a JobRecord> {
        self.row_ix.get(i).and_then(|&ix| self.raw.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a JobRecord> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.raw.get(ix))
    }

    /// Borrowed rows, ready for the CSV exporter.
    pub fn to_refs(&self) -> Vec<&'a JobRecord> {
        self.iter().collect()
    }
}
