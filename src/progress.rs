// src/progress.rs
use crate::offer::Source;

/// Lightweight progress reporting for a harvest.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of sites about to be queried.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One site answered and was parsed.
    fn item_done(&mut self, _source: Source, _offers: usize) {}

    /// One site could not be fetched; it contributes nothing.
    fn item_failed(&mut self, _source: Source, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
