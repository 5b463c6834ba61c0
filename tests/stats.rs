// tests/stats.rs
use chrono::{Duration, TimeZone, Utc};
use seek_dash::job::JobRecord;
use seek_dash::stats::JobStats;

fn posted(company: &str, scraped_at: String) -> JobRecord {
    JobRecord { company: company.into(), scraped_at, ..JobRecord::default() }
}

#[test]
fn counts_over_full_list() {
    let now = Utc.with_ymd_and_hms(2025, 10, 14, 12, 0, 0).unwrap();
    let iso = |d: chrono::DateTime<Utc>| d.to_rfc3339();

    let jobs = vec![
        posted("Acme", iso(now - Duration::hours(1))),
        posted("Acme", iso(now - Duration::hours(23))),
        posted("Globex", iso(now - Duration::hours(24))), // exactly a day: out
        posted("Initech", iso(now - Duration::days(3))),
        posted("Initech", "garbage".into()),
    ];

    let s = JobStats::compute(&jobs, now);
    assert_eq!(s.total, 5);
    assert_eq!(s.last_24h, 2);
    assert_eq!(s.companies, 3);
}

#[test]
fn empty_list() {
    assert_eq!(JobStats::compute(&[], Utc::now()), JobStats::default());
}
