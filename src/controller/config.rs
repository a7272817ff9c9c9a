use std::time::Duration;

/// Tuning knobs for the interaction controller.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Quiet period after the last keystroke before a suggestion fetch is
    /// issued. Only affects perceived responsiveness, not correctness.
    pub suggest_debounce: Duration,
    /// Backfill from history only when the backend returns fewer
    /// suggestions than this.
    pub backfill_threshold: usize,
    /// Maximum number of history entries prepended when backfilling.
    pub backfill_limit: usize,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            suggest_debounce: Duration::from_millis(250),
            backfill_threshold: 10,
            backfill_limit: 5,
        }
    }
}
