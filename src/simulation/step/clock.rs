use super::PerfTimer;

/// Wall-clock source for `tick_now`
pub(super) struct Clock {
    last: Option<PerfTimer>,
}

impl Clock {
    pub(super) fn new() -> Self {
        Self { last: None }
    }

    /// Seconds since the previous sample; 0 on the first
    pub(super) fn sample(&mut self) -> f32 {
        let dt = self.last.map(|t| t.elapsed_secs()).unwrap_or(0.0);
        self.last = Some(PerfTimer::start());
        dt
    }
}

/// Clean a host-supplied frame delta.
///
/// NaN and negative values become 0; anything above `max_dt` (a tab that
/// was backgrounded for minutes, say) is clamped to it.
pub fn sanitize_dt(dt: f32, max_dt: f32) -> f32 {
    if dt.is_nan() || dt <= 0.0 {
        return 0.0;
    }
    dt.min(max_dt)
}
