use std::time::Instant;

pub struct Telemetry {
    start: Instant,
}

impl Telemetry {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }

    /// Elapsed time in whole seconds, for end-of-run summaries.
    pub fn elapsed_seconds(&self) -> u64 {
        self.start.elapsed().as_secs()
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}
