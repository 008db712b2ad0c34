//! Re-initialization guard.

use std::cell::Cell;

/// One-shot initialization flag.
///
/// Every component owns one so that a repeated `init` attaches nothing.
#[derive(Debug, Default)]
pub struct InitGuard {
    claimed: Cell<bool>,
}

impl InitGuard {
    /// Create an unclaimed guard.
    pub const fn new() -> Self {
        Self {
            claimed: Cell::new(false),
        }
    }

    /// Returns `true` exactly once, on the first call.
    pub fn claim(&self) -> bool {
        if self.claimed.replace(true) {
            tracing::debug!("init guard already claimed, skipping");
            return false;
        }
        true
    }

    /// Whether `claim` has already succeeded.
    pub fn is_claimed(&self) -> bool {
        self.claimed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::InitGuard;

    #[test]
    fn claims_only_once() {
        let guard = InitGuard::new();
        assert!(!guard.is_claimed());
        assert!(guard.claim());
        assert!(guard.is_claimed());
        assert!(!guard.claim());
        assert!(!guard.claim());
    }
}
