// src/progress.rs
/// Lightweight progress reporting for background fetches.
/// Frontends (GUI/CLI) implement this to surface status and wake the UI.
///
/// Called from worker threads, hence `&self` + `Send + Sync`.
pub trait Progress: Send + Sync {
    /// A fetch with sequence number `seq` was issued.
    fn begin(&self, _seq: u64) {}

    /// Free-form status line for human eyes.
    fn log(&self, _msg: &str) {}

    /// Fetch `seq` resolved, whether or not its result gets applied.
    fn finish(&self, _seq: u64) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
