//! Submission Throttle
//!
//! Page-local attempt counter. Resets on reload and is not tied to the
//! user, so it only slows down accidental resubmits.

/// Attempts allowed before a block starts
pub const MAX_ATTEMPTS: u32 = 3;

/// Length of a block
pub const BLOCK_WINDOW_MS: i64 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Still inside a block window
    Blocked { remaining_secs: u64 },
    /// Attempt counted; `block_started` is set on the attempt that triggers a block
    Allowed { block_started: bool },
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubmitThrottle {
    attempt_count: u32,
    blocked_until: Option<i64>,
}

impl SubmitThrottle {
    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    pub fn blocked_until(&self) -> Option<i64> {
        self.blocked_until
    }

    /// Whole seconds left in the block, rounded up
    pub fn remaining_secs(&self, now_ms: i64) -> Option<u64> {
        let until = self.blocked_until?;
        if now_ms >= until {
            return None;
        }
        let remaining_ms = (until - now_ms) as u64;
        Some(remaining_ms.div_ceil(1000))
    }

    pub fn is_blocked(&self, now_ms: i64) -> bool {
        self.remaining_secs(now_ms).is_some()
    }

    /// Count an attempt. The attempt that triggers a block still goes through.
    pub fn register_attempt(&mut self, now_ms: i64) -> AttemptOutcome {
        if let Some(remaining_secs) = self.remaining_secs(now_ms) {
            return AttemptOutcome::Blocked { remaining_secs };
        }
        self.blocked_until = None;
        self.attempt_count += 1;
        if self.attempt_count >= MAX_ATTEMPTS {
            self.blocked_until = Some(now_ms + BLOCK_WINDOW_MS);
            self.attempt_count = 0;
            return AttemptOutcome::Allowed { block_started: true };
        }
        AttemptOutcome::Allowed { block_started: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_third_attempt_starts_block() {
        let mut throttle = SubmitThrottle::default();
        assert_eq!(throttle.register_attempt(0), AttemptOutcome::Allowed { block_started: false });
        assert_eq!(throttle.register_attempt(10), AttemptOutcome::Allowed { block_started: false });
        assert_eq!(throttle.attempt_count(), 2);
        assert_eq!(throttle.register_attempt(20), AttemptOutcome::Allowed { block_started: true });
        assert_eq!(throttle.attempt_count(), 0);
        assert_eq!(throttle.blocked_until(), Some(20 + BLOCK_WINDOW_MS));
    }

    #[test]
    fn test_blocked_reports_remaining_seconds() {
        let mut throttle = SubmitThrottle::default();
        for t in [0, 0, 0] {
            throttle.register_attempt(t);
        }
        assert_eq!(throttle.register_attempt(1), AttemptOutcome::Blocked { remaining_secs: 60 });
        assert_eq!(throttle.register_attempt(59_001), AttemptOutcome::Blocked { remaining_secs: 1 });
        // Blocked attempts are not counted
        assert_eq!(throttle.attempt_count(), 0);
    }

    #[test]
    fn test_attempts_resume_after_expiry() {
        let mut throttle = SubmitThrottle::default();
        for t in [0, 0, 0] {
            throttle.register_attempt(t);
        }
        assert!(throttle.is_blocked(BLOCK_WINDOW_MS - 1));
        assert!(!throttle.is_blocked(BLOCK_WINDOW_MS));
        assert_eq!(
            throttle.register_attempt(BLOCK_WINDOW_MS),
            AttemptOutcome::Allowed { block_started: false }
        );
        assert_eq!(throttle.attempt_count(), 1);
        assert_eq!(throttle.blocked_until(), None);
    }
}
