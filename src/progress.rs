// src/progress.rs
/// Lightweight progress reporting used by long-running operations (archive build).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one page has been parsed.
    fn item_done(&mut self, _page: u32, _proverbs: usize) {}

    /// Called when a page does not exist (404) and was skipped.
    fn item_skipped(&mut self, _page: u32) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
