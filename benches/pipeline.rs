// benches/pipeline.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use seek_dash::{
    export,
    facets::Facets,
    filter::{filter_jobs, JobFilter},
    job::JobRecord,
};

const LOCATIONS: &[&str] = &["Sydney NSW", "Melbourne VIC", "Brisbane QLD", "Perth WA", "Remote"];
const COMPANIES: &[&str] = &["Acme", "Globex", "Initech", "Umbrella", "Hooli", "Stark"];

/// A full page from the API: 100 postings.
fn sample_jobs() -> Vec<JobRecord> {
    (0..100)
        .map(|i| JobRecord {
            job_id: format!("{}", 80_000_000 + i),
            title: format!("{} Engineer {}", if i % 3 == 0 { "Software" } else { "Data" }, i),
            company: COMPANIES[i % COMPANIES.len()].to_string(),
            location: LOCATIONS[i % LOCATIONS.len()].to_string(),
            salary: (i % 2 == 0).then(|| format!("${}k - ${}k", 90 + i, 120 + i)),
            job_type: Some("Full time".into()),
            description: Some("Build and \"ship\" things. ".repeat(12)),
            job_url: format!("https://www.seek.com.au/job/{}", 80_000_000 + i),
            url: format!("https://www.seek.com.au/job/{}", 80_000_000 + i),
            scraped_at: format!("2025-10-{:02}T{:02}:30:00Z", 1 + i % 28, i % 24),
            ..JobRecord::default()
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let jobs = sample_jobs();
    let filter = JobFilter::new("engineer", "Sydney NSW", "");

    c.bench_function("filter_jobs", |b| {
        b.iter(|| {
            let out = filter_jobs(black_box(&jobs), black_box(&filter));
            black_box(out.len())
        })
    });

    c.bench_function("facets_from_jobs", |b| {
        b.iter(|| {
            let f = Facets::from_jobs(black_box(&jobs));
            black_box(f.locations.len() + f.companies.len())
        })
    });

    let all: Vec<&JobRecord> = jobs.iter().collect();
    c.bench_function("csv_export", |b| {
        b.iter(|| {
            let s = export::to_csv_string(black_box(&all));
            black_box(s.map(|s| s.len()).unwrap_or(0))
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
