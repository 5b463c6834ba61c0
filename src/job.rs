// src/job.rs
//
// One job posting as served by `/api/v1/jobs/latest`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::consts::DESCRIPTION_PREVIEW_CHARS;
use crate::time;

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobRecord {
    /// Display key. The API types it as optional; missing or null → "".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub job_id: String,

    pub title: String,
    pub company: String,
    pub location: String,

    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,

    /// Link shown in the dashboard
    #[serde(default, deserialize_with = "null_as_empty")]
    pub job_url: String,
    /// Link written on export. Not guaranteed to equal `job_url`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,

    pub scraped_at: String,

    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub posted_date: Option<String>,
}

/// `null` reads the same as a missing key.
fn null_as_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(de).map(Option::unwrap_or_default)
}

impl JobRecord {
    /// `scraped_at` as an absolute instant; `None` if it doesn't parse.
    pub fn scraped_at_utc(&self) -> Option<DateTime<Utc>> {
        time::parse_timestamp(&self.scraped_at)
    }

    /// First 150 chars of the description, `...` appended when cut.
    pub fn description_preview(&self) -> Option<String> {
        let desc = self.description.as_deref()?;
        if desc.is_empty() {
            return None;
        }
        let mut chars = desc.chars();
        let head: String = chars.by_ref().take(DESCRIPTION_PREVIEW_CHARS).collect();
        if chars.next().is_some() {
            Some(format!("{head}..."))
        } else {
            Some(head)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_shape_with_missing_optionals() {
        let json = r#"{
            "job_id": "12345678",
            "title": "HR Manager",
            "company": "Tech Corp",
            "location": "Sydney NSW",
            "classification": "Human Resources & Recruitment",
            "job_url": "https://www.seek.com.au/job/12345678",
            "salary": null,
            "scraped_at": "2025-10-14T10:30:00",
            "something_new": 42
        }"#;
        let job: JobRecord = serde_json::from_str(json).unwrap();
        assert_eq!(job.job_id, "12345678");
        assert_eq!(job.salary, None);
        assert_eq!(job.job_type, None);
        assert_eq!(job.url, "");
        assert_eq!(job.classification.as_deref(), Some("Human Resources & Recruitment"));
        assert!(job.scraped_at_utc().is_some());
    }

    #[test]
    fn explicit_nulls_do_not_reject_the_batch() {
        let json = r#"[
            {
                "title": "HR Manager",
                "company": "Tech Corp",
                "location": "Sydney NSW",
                "job_url": null,
                "url": null,
                "posted_date": null,
                "scraped_at": "2025-10-14T10:30:00",
                "job_id": null
            },
            {
                "job_id": "2",
                "title": "Nurse",
                "company": "Health Co",
                "location": "Perth WA",
                "url": "https://www.seek.com.au/job/2",
                "scraped_at": "2025-10-14T10:30:00"
            }
        ]"#;
        let jobs: Vec<JobRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].job_id, "");
        assert_eq!(jobs[0].job_url, "");
        assert_eq!(jobs[0].url, "");
        assert_eq!(jobs[0].posted_date, None);
        assert_eq!(jobs[1].job_id, "2");
        assert_eq!(jobs[1].url, "https://www.seek.com.au/job/2");
    }

    #[test]
    fn description_preview_truncates_on_char_boundary() {
        let mut job = JobRecord::default();
        assert_eq!(job.description_preview(), None);

        job.description = Some("short".into());
        assert_eq!(job.description_preview().as_deref(), Some("short"));

        job.description = Some("é".repeat(151));
        let p = job.description_preview().unwrap();
        assert!(p.ends_with("..."));
        assert_eq!(p.chars().count(), 153);

        job.description = Some("x".repeat(150));
        assert_eq!(job.description_preview().unwrap().len(), 150);
    }
}
