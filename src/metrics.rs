use std::time::Duration;

/// Wall-clock timings of a completed run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunMetrics {
    /// Parallel phase plus reduction; initialization and reporting excluded.
    pub compute_time: Duration,
}

impl RunMetrics {
    /// The timed phase in milliseconds, as reported to the user.
    pub fn compute_millis(&self) -> f64 {
        self.compute_time.as_secs_f64() * 1e3
    }
}
