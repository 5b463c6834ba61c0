// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use eframe::egui;

use crate::{
    config::{options::AppOptions, state::AppState},
    net::{FetchError, HttpJobSource},
    poller::Poller,
};

use super::{components, progress::GuiProgress};

pub const WINDOW_TITLE: &str = "Job Listings Dashboard";

/// Relative times ("3m ago", "Updated just now") drift; redraw at least this often.
const CLOCK_REPAINT: Duration = Duration::from_secs(30);

pub fn run(native: eframe::NativeOptions, options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        native,
        Box::new(move |cc| {
            let app = App::new(cc, options)?;
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth for options + filter inputs (UI thread only)
    pub state: AppState,

    // job list, loading/error flags, refresh timer
    pub poller: Poller,

    // status line (workers write here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, options: AppOptions) -> Result<Self, FetchError> {
        let status = Arc::new(Mutex::new(s!("Idle")));
        let progress = Arc::new(GuiProgress::new(status.clone(), cc.egui_ctx.clone()));

        logf!(
            "Init: api={}, export dir={}",
            options.api.latest_jobs_url(),
            options.export.dir().display()
        );

        let source = Arc::new(HttpJobSource::new(options.api.clone())?);
        let mut poller = Poller::new(source, progress);
        poller.start(Instant::now());

        Ok(Self {
            state: AppState::new(options),
            poller,
            status,
        })
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        let mut guard = match self.status.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = msg.into();
    }

    pub fn status_text(&self) -> String {
        match self.status.lock() {
            Ok(g) => g.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Manual refresh (Refresh / Retry / Refresh Now).
    pub fn refresh(&mut self) {
        logf!("UI: Refresh requested");
        self.poller.refresh();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let next = self
            .poller
            .tick(Instant::now())
            .map_or(CLOCK_REPAINT, |left| left.min(CLOCK_REPAINT));
        ctx.request_repaint_after(next);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            components::header::draw_footer(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::stats_bar::draw(ui, self);

            components::alert::draw(ui, self);

            ui.separator();

            components::filter_bar::draw(ui, self);

            components::export_bar::draw(ui, self);

            ui.separator();

            components::job_table::draw(ui, self);
        });
    }
}
