/// Monotonic-enough stopwatch: `Date.now()` in the browser, `Instant` natively
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer { start_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { start: std::time::Instant::now() }
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            // Date.now() can step backwards when the system clock is adjusted
            (js_sys::Date::now() - self.start_ms).max(0.0)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }

    pub(crate) fn elapsed_secs(&self) -> f32 {
        (self.elapsed_ms() / 1000.0) as f32
    }
}
