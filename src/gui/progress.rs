// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::progress::Progress;

/// Mirrors fetch activity into the status line and wakes the UI thread
/// when a worker finishes.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx }
    }

    fn set_status(&self, msg: impl Into<String>) {
        let mut guard = match self.status.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = msg.into();
    }
}

impl Progress for GuiProgress {
    fn begin(&self, _seq: u64) {
        self.set_status("Refreshing…");
    }
    fn log(&self, msg: &str) {
        self.set_status(msg);
    }
    fn finish(&self, _seq: u64) {
        self.ctx.request_repaint();
    }
}
