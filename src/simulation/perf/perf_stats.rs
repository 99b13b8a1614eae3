use wasm_bindgen::prelude::*;

/// Snapshot of the last tick.
///
/// Timings are only filled while perf metrics are enabled; the counters
/// are always reported.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) input_ms: f64,
    pub(super) broad_ms: f64,
    pub(super) narrow_ms: f64,
    pub(super) response_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) dt: f32,
    pub(super) candidates: u32,
    pub(super) collisions: u32,
    pub(super) rays_cast: u32,
    pub(super) entities_integrated: u32,
    pub(super) entities_skipped: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn input_ms(&self) -> f64 { self.input_ms }
    #[wasm_bindgen(getter)]
    pub fn broad_ms(&self) -> f64 { self.broad_ms }
    #[wasm_bindgen(getter)]
    pub fn narrow_ms(&self) -> f64 { self.narrow_ms }
    #[wasm_bindgen(getter)]
    pub fn response_ms(&self) -> f64 { self.response_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f32 { self.dt }
    #[wasm_bindgen(getter)]
    pub fn candidates(&self) -> u32 { self.candidates }
    #[wasm_bindgen(getter)]
    pub fn collisions(&self) -> u32 { self.collisions }
    #[wasm_bindgen(getter)]
    pub fn rays_cast(&self) -> u32 { self.rays_cast }
    #[wasm_bindgen(getter)]
    pub fn entities_integrated(&self) -> u32 { self.entities_integrated }
    #[wasm_bindgen(getter)]
    pub fn entities_skipped(&self) -> u32 { self.entities_skipped }
}
