//! Page-load timing diagnostic.

#[cfg(test)]
#[path = "perf_test.rs"]
mod perf_test;

/// Load-event timestamps of the navigation entry, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationTiming {
    pub load_event_start: f64,
    pub load_event_end: f64,
}

impl NavigationTiming {
    /// Duration of the load event.
    #[must_use]
    pub fn load_duration_ms(self) -> f64 {
        self.load_event_end - self.load_event_start
    }
}

#[must_use]
pub fn load_time_message(duration_ms: f64) -> String {
    format!("Page load time: {duration_ms}ms")
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PerformanceMonitor;

impl PerformanceMonitor {
    /// Log the load duration, if timing data is available.
    pub fn report(self, timing: Option<NavigationTiming>) -> Option<f64> {
        let Some(timing) = timing else {
            log::info!("navigation timing unavailable");
            return None;
        };
        let duration = timing.load_duration_ms();
        log::info!("{}", load_time_message(duration));
        Some(duration)
    }
}
