// src/progress.rs
/// Reporting sink handed to every mode. Per-item diagnostics go through `log`;
/// frontends decide where they end up (the CLI draws bars and logs to `tracing`).
pub trait Progress {
    /// Called when a loop starts, with a short label and the number of items.
    fn begin(&mut self, _label: &str, _total: usize) {}

    /// Free-form diagnostic for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one item of the current loop completes, successful or not.
    fn item_done(&mut self) {}

    /// Called when the current loop ends.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
