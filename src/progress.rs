// src/progress.rs
/// Progress reporting for the one slow thing we do: fetching a season.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one season has been fetched and normalized.
    fn item_done(&mut self, _year: u32) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
