//! Cycle accumulation: wrap-then-add, every tick.
//!
//! The wrap runs before the add and runs unconditionally, even at rate 0, so
//! any progress value at or above 1 (a large frame delta, or externally
//! injected state) is renormalized at the start of the next tick. After the
//! add, progress may again transiently sit at 1 or above until that next
//! wrap; for the usual per-tick increments below 1 it stays in `[0,1)`.

/// Bring a progress value back into `[0,1)` by repeated subtraction.
/// Idempotent for values already in range. Returns the wrapped value and how
/// many whole cycles were shed, saturating at `u32::MAX`.
pub fn wrap(progress: f64) -> (f64, u32) {
    let mut p = progress;
    let mut completed: u32 = 0;
    // Far-out values shed their whole part in one step: the subtract loop
    // cannot advance once p is large enough that `p - 1.0 == p`.
    if p >= u32::MAX as f64 {
        p -= p.floor();
        completed = u32::MAX;
    }
    while p >= 1.0 {
        p -= 1.0;
        completed = completed.saturating_add(1);
    }
    (p, completed)
}

/// One tick of accumulation: wrap, then advance by elapsed time scaled by
/// the rate. `cycle_ms` is the duration of one full cycle at rate 1.
pub fn advance(progress: f64, rate: f64, elapsed_ms: f64, cycle_ms: f64) -> (f64, u32) {
    let (wrapped, completed) = wrap(progress);
    (wrapped + elapsed_ms / cycle_ms * rate, completed)
}
