//! "Latest call wins" bookkeeping for delayed work.
//!
//! Each trigger takes a ticket; a delayed callback only acts if its ticket is
//! still the newest. Debounced input and copy-feedback reverts both use it.

use std::cell::Cell;

/// Monotonic ticket counter.
#[derive(Debug, Default)]
pub struct Generation {
    current: Cell<u64>,
}

impl Generation {
    /// Counter with no tickets issued.
    pub const fn new() -> Self {
        Self {
            current: Cell::new(0),
        }
    }

    /// Issue a new ticket, superseding every earlier one.
    pub fn bump(&self) -> u64 {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        next
    }

    /// Whether `ticket` is still the newest one issued.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.current.get() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::Generation;

    #[test]
    fn superseded_call_never_fires() {
        let generation = Generation::new();
        let first = generation.bump();
        let second = generation.bump();
        let third = generation.bump();

        // Timers fire in scheduling order; only the last one acts.
        let fired: Vec<u64> = [first, second, third]
            .into_iter()
            .filter(|ticket| generation.is_current(*ticket))
            .collect();
        assert_eq!(fired, vec![third]);
    }

    #[test]
    fn quiet_period_lets_the_single_call_fire() {
        let generation = Generation::new();
        let ticket = generation.bump();
        assert!(generation.is_current(ticket));
        assert!(generation.is_current(ticket));
    }

    #[test]
    fn earlier_revert_does_not_cut_later_feedback_short() {
        let clicks = Generation::new();
        let first_click = clicks.bump();
        let second_click = clicks.bump();

        // First click's revert timer fires while the second click's feedback shows.
        assert!(!clicks.is_current(first_click));
        assert!(clicks.is_current(second_click));
    }
}
