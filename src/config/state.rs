// src/config/state.rs
use super::options::AppOptions;
use crate::filter::JobFilter;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Search box + location/company combos. Survives refreshes.
    pub filter: JobFilter,

    /// Export directory as typed by the user (applied on Export)
    pub out_dir_text: String,
    pub out_dir_dirty: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            filter: JobFilter::default(),
            out_dir_text: s!(),
            out_dir_dirty: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let out_dir_text = options.export.dir().to_string_lossy().into_owned();
        Self {
            options,
            gui: GuiState { out_dir_text, ..GuiState::default() },
        }
    }

    /// Push the typed export dir into options if the user edited it.
    pub fn apply_out_dir_text(&mut self) {
        if self.gui.out_dir_dirty {
            self.options.export.set_dir(&self.gui.out_dir_text);
            self.gui.out_dir_dirty = false;
            logf!("Export: Out dir set → {}", self.options.export.dir().display());
        }
    }
}
