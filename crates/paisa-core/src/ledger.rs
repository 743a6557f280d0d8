//! Balance ledger
//!
//! Holds the cumulative income modifier applied to every forecast entry.
//! The value lives for the process lifetime and is shared between the
//! forecast provider and the income adjuster, so the read-modify-write in
//! [`BalanceLedger::add`] happens under a mutex.

use std::sync::{Arc, Mutex};

/// Shared, process-wide income modifier
///
/// Cloning is cheap and all clones observe the same value.
#[derive(Debug, Clone, Default)]
pub struct BalanceLedger {
    modifier: Arc<Mutex<f64>>,
}

impl BalanceLedger {
    /// Create a ledger with modifier 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amount (negative and zero accepted) and return the new modifier
    pub fn add(&self, amount: f64) -> f64 {
        // A poisoned lock still holds a valid f64; recover the inner value
        let mut modifier = self
            .modifier
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *modifier += amount;
        *modifier
    }

    /// Current modifier value
    pub fn modifier(&self) -> f64 {
        *self
            .modifier
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let ledger = BalanceLedger::new();
        assert_eq!(ledger.modifier(), 0.0);
    }

    #[test]
    fn additions_accumulate() {
        let ledger = BalanceLedger::new();
        assert_eq!(ledger.add(1000.0), 1000.0);
        assert_eq!(ledger.add(-250.0), 750.0);
        assert_eq!(ledger.modifier(), 750.0);
    }

    #[test]
    fn adding_zero_is_a_noop() {
        let ledger = BalanceLedger::new();
        ledger.add(500.0);
        assert_eq!(ledger.add(0.0), 500.0);
    }

    #[test]
    fn two_additions_equal_their_sum() {
        let split = BalanceLedger::new();
        split.add(300.0);
        split.add(-800.0);

        let lump = BalanceLedger::new();
        lump.add(-500.0);

        assert_eq!(split.modifier(), lump.modifier());
    }

    #[test]
    fn clones_share_the_same_value() {
        let ledger = BalanceLedger::new();
        let clone = ledger.clone();
        ledger.add(42.0);
        assert_eq!(clone.modifier(), 42.0);
    }

    #[test]
    fn concurrent_additions_are_not_lost() {
        let ledger = BalanceLedger::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ledger = ledger.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        ledger.add(1.0);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(ledger.modifier(), 8000.0);
    }
}
