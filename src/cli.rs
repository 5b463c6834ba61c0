// src/cli.rs
//
// One-shot, non-interactive front end: fetch once, filter, write CSV.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    config::{
        consts::{API_URL_ENV, DEFAULT_API_URL, DEFAULT_OUT_DIR, EXPORT_DIR_ENV},
        options::{ApiOptions, ExportOptions},
    },
    data::{JobList, JobView},
    export,
    facets::Facets,
    file,
    filter::JobFilter,
    net::{HttpJobSource, JobSource},
};

#[derive(Debug, Parser)]
#[command(name = "jobs_cli", version, about = "Fetch the latest scraped jobs and export them as CSV")]
pub struct Args {
    /// Base URL of the jobs API
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Case-insensitive match on title or company
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Exact location
    #[arg(short, long, default_value = "")]
    pub location: String,

    /// Exact company
    #[arg(short, long, default_value = "")]
    pub company: String,

    /// Directory for seek-jobs-<date>.csv
    #[arg(short, long, env = EXPORT_DIR_ENV, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    /// Print CSV to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// List locations and companies instead of exporting
    #[arg(long)]
    pub facets: bool,
}

impl Args {
    pub fn filter(&self) -> JobFilter {
        JobFilter::new(&self.search, &self.location, &self.company)
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    run_with(&args)
}

pub fn run_with(args: &Args) -> Result<()> {
    let api = ApiOptions::new(&args.api_url);
    logf!("CLI: fetching {}", api.latest_jobs_url());

    let source = HttpJobSource::new(api).wrap_err("building HTTP client")?;
    let jobs = source.fetch_latest().wrap_err("fetching latest jobs")?;
    let list = JobList::new(jobs);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.facets {
        let f = Facets::from_jobs(list.jobs());
        writeln!(out, "# Locations ({})", f.locations.len())?;
        for l in &f.locations { writeln!(out, "{l}")?; }
        writeln!(out, "# Companies ({})", f.companies.len())?;
        for c in &f.companies { writeln!(out, "{c}")?; }
        return Ok(());
    }

    let filter = args.filter();
    let view = JobView::new(&list, &filter);
    logf!("CLI: {} of {} job(s) match", view.len(), view.total());

    if args.stdout {
        export::write_jobs(&mut out, &view.to_refs()).wrap_err("writing CSV to stdout")?;
        return Ok(());
    }

    let mut export_opts = ExportOptions::default();
    export_opts.set_dir(&args.out.to_string_lossy());
    let path = file::write_export(&export_opts, &view.to_refs(), file::export_date())
        .map_err(|e| color_eyre::eyre::eyre!("export failed: {e}"))?;
    eprintln!("Wrote {} of {} job(s) to {}", view.len(), view.total(), path.display());
    Ok(())
}
