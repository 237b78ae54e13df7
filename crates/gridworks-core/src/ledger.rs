//! The resource ledger: the simulation's single accumulated scalar output.

/// Running total of resource produced by producer entities.
///
/// Mutated only during the tick, only by producers. Monotonically
/// non-decreasing as long as rates stay non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResourceLedger {
    total: f64,
}

impl ResourceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one producer's output for one tick and return the increment.
    /// `cycle_ms` is the duration of one full cycle at rate 1.
    pub(crate) fn record(&mut self, rate: f64, elapsed_ms: f64, cycle_ms: f64) -> f64 {
        let amount = rate * elapsed_ms / cycle_ms;
        self.total += amount;
        amount
    }

    /// The accumulated total.
    pub fn total(&self) -> f64 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ledger_is_empty() {
        assert_eq!(ResourceLedger::new().total(), 0.0);
    }

    #[test]
    fn record_credits_rate_scaled_by_elapsed() {
        let mut ledger = ResourceLedger::new();
        let amount = ledger.record(0.4, 500.0, 1000.0);
        assert_eq!(amount, 0.2);
        assert_eq!(ledger.total(), 0.2);
    }

    #[test]
    fn record_accumulates_across_ticks() {
        let mut ledger = ResourceLedger::new();
        for _ in 0..5 {
            ledger.record(0.4, 500.0, 1000.0);
        }
        assert!((ledger.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_rate_credits_nothing() {
        let mut ledger = ResourceLedger::new();
        assert_eq!(ledger.record(0.0, 500.0, 1000.0), 0.0);
        assert_eq!(ledger.total(), 0.0);
    }
}
