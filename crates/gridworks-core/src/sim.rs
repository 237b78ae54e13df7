//! Simulation state: the tick counter and frame-timestamp bookkeeping.
//!
//! The host invokes the engine once per rendering-frame callback with that
//! frame's timestamp; elapsed time is the delta between successive
//! timestamps. The first callback seeds the last-seen timestamp and reports
//! a zero delta, so no tick ever runs against an invented interval.

/// Mutable simulation bookkeeping tracked by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SimState {
    /// Current tick counter. Incremented by 1 for each completed tick.
    pub tick: u64,

    /// Timestamp of the previous frame callback, in milliseconds. `None`
    /// until the first callback arrives.
    last_timestamp_ms: Option<f64>,
}

impl SimState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed milliseconds since the previous frame callback. The first
    /// call seeds the timestamp and returns 0. A timestamp that regresses
    /// (host clock reset) also reports 0 and reseeds, so no tick ever runs
    /// backwards.
    pub(crate) fn elapsed(&mut self, now_ms: f64) -> f64 {
        let elapsed = match self.last_timestamp_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_timestamp_ms = Some(now_ms);
        elapsed
    }
}
