// src/export.rs
//
// CSV export of the currently filtered jobs.
//
// Header line is plain; every data field is wrapped in double quotes, with
// embedded quotes doubled. Records end in '\n'.

use std::io::{self, Write};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::config::consts::MISSING_FIELD;
use crate::job::JobRecord;
use crate::time;

pub const HEADERS: [&str; 7] = [
    "Title",
    "Company",
    "Location",
    "Salary",
    "Job Type",
    "URL",
    "Scraped At",
];

/* ---------------- Rows ---------------- */

/// One output row, in `HEADERS` order.
pub fn export_row(job: &JobRecord) -> [String; 7] {
    [
        job.title.clone(),
        job.company.clone(),
        job.location.clone(),
        job.salary.clone().unwrap_or_else(|| s!(MISSING_FIELD)),
        job.job_type.clone().unwrap_or_else(|| s!(MISSING_FIELD)),
        job.url.clone(),
        time::datetime_or_raw(&job.scraped_at),
    ]
}

/* ---------------- Writing ---------------- */

/// Header + one quoted row per job, to any writer.
pub fn write_jobs<W: Write>(mut w: W, jobs: &[&JobRecord]) -> Result<(), csv::Error> {
    {
        let mut header = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut w);
        header.write_record(HEADERS)?;
        header.flush()?;
    }

    let mut body = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .double_quote(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(&mut w);
    for job in jobs {
        body.write_record(export_row(job))?;
    }
    body.flush()?;
    Ok(())
}

/// Full export payload as text (Copy/Export).
pub fn to_csv_string(jobs: &[&JobRecord]) -> Result<String, csv::Error> {
    let mut buf: Vec<u8> = Vec::new();
    write_jobs(&mut buf, jobs)?;
    String::from_utf8(buf)
        .map_err(|e| csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, e)))
}
