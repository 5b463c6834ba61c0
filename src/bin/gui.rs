// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use seek_dash::{
    config::{consts::WINDOW_SIZE, options::AppOptions},
    gui,
};
use eframe::egui::{IconData, ViewportBuilder};

fn app_icon() -> Option<IconData> {
    let img = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/jobs.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = img.dimensions();
    Some(IconData { rgba: img.into_raw(), width: w, height: h })
}

fn main() {
    seek_dash::log::init();

    let options = AppOptions::from_env();

    let mut viewport = ViewportBuilder::default().with_inner_size(WINDOW_SIZE);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(native, options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
