// src/filter.rs
//
// The view filter: free-text search AND exact location AND exact company.
// An empty field means "match everything" for that predicate.

use crate::job::JobRecord;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobFilter {
    /// Case-insensitive substring of title or company
    pub search: String,
    /// Exact location; "" = All Locations
    pub location: String,
    /// Exact company; "" = All Companies
    pub company: String,
}

impl JobFilter {
    pub fn new(search: &str, location: &str, company: &str) -> Self {
        Self {
            search: s!(search),
            location: s!(location),
            company: s!(company),
        }
    }

    /// All three predicates at their match-all defaults.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.location.is_empty() && self.company.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Lowercase the search term once; reuse it for every row.
    pub fn matcher(&self) -> Matcher<'_> {
        Matcher { needle: self.search.to_lowercase(), filter: self }
    }

    pub fn matches(&self, job: &JobRecord) -> bool {
        self.matcher().matches(job)
    }
}

/// A `JobFilter` with its search term pre-lowercased.
pub struct Matcher<'a> {
    needle: String,
    filter: &'a JobFilter,
}

impl Matcher<'_> {
    pub fn matches(&self, job: &JobRecord) -> bool {
        self.matches_search(job) && self.matches_location(job) && self.matches_company(job)
    }

    fn matches_search(&self, job: &JobRecord) -> bool {
        self.needle.is_empty()
            || job.title.to_lowercase().contains(&self.needle)
            || job.company.to_lowercase().contains(&self.needle)
    }

    fn matches_location(&self, job: &JobRecord) -> bool {
        self.filter.location.is_empty() || job.location == self.filter.location
    }

    fn matches_company(&self, job: &JobRecord) -> bool {
        self.filter.company.is_empty() || job.company == self.filter.company
    }
}

/// Survivors of `filter`, in their original relative order.
pub fn filter_jobs<'a>(jobs: &'a [JobRecord], filter: &JobFilter) -> Vec<&'a JobRecord> {
    let m = filter.matcher();
    jobs.iter().filter(|j| m.matches(j)).collect()
}

/// Positions of the survivors in `jobs`.
pub fn filter_indices(jobs: &[JobRecord], filter: &JobFilter) -> Vec<usize> {
    let m = filter.matcher();
    jobs.iter()
        .enumerate()
        .filter(|(_, j)| m.matches(j))
        .map(|(i, _)| i)
        .collect()
}
