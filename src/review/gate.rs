//! Submission Gate
//!
//! Decides what happens when the submit button is pressed, before any
//! network call.

use super::throttle::{AttemptOutcome, SubmitThrottle};

/// Title of throttle notices
pub const THROTTLE_TITLE: &str = "Chống spam";

/// Ratings below this ask for confirmation first
pub const LOW_RATING_THRESHOLD: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    /// Still blocked; nothing else happens
    Blocked { remaining_secs: u64 },
    /// Ask the visitor to log in
    RequireLogin,
    /// Ask before sending a rating below the threshold
    ConfirmLowRating,
    /// Submit right away
    Proceed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateDecision {
    pub action: GateAction,
    /// This attempt started a new block window
    pub block_started: bool,
}

/// Count the attempt and pick the next step.
///
/// The attempt is counted even when login is required. Rating 0 proceeds
/// and is then rejected by validation.
pub fn gate_submission(
    throttle: &mut SubmitThrottle,
    now_ms: i64,
    authenticated: bool,
    rating: u8,
) -> GateDecision {
    let block_started = match throttle.register_attempt(now_ms) {
        AttemptOutcome::Blocked { remaining_secs } => {
            return GateDecision {
                action: GateAction::Blocked { remaining_secs },
                block_started: false,
            };
        }
        AttemptOutcome::Allowed { block_started } => block_started,
    };

    let action = if !authenticated {
        GateAction::RequireLogin
    } else if (1..LOW_RATING_THRESHOLD).contains(&rating) {
        GateAction::ConfirmLowRating
    } else {
        GateAction::Proceed
    };
    GateDecision { action, block_started }
}

pub fn blocked_notice(remaining_secs: u64) -> String {
    format!("Bạn đã thử gửi quá nhiều lần. Vui lòng thử lại sau {remaining_secs} giây.")
}

pub fn block_started_notice() -> String {
    format!("Bạn đã thực hiện {MAX} lần gửi. Tạm khóa gửi 1 phút.", MAX = super::MAX_ATTEMPTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_ratings_need_confirmation() {
        for rating in 1..=3 {
            let mut throttle = SubmitThrottle::default();
            let decision = gate_submission(&mut throttle, 0, true, rating);
            assert_eq!(decision.action, GateAction::ConfirmLowRating);
        }
    }

    #[test]
    fn test_high_ratings_proceed() {
        for rating in [0, 4, 5] {
            let mut throttle = SubmitThrottle::default();
            let decision = gate_submission(&mut throttle, 0, true, rating);
            assert_eq!(decision.action, GateAction::Proceed);
        }
    }

    #[test]
    fn test_login_required_regardless_of_rating() {
        let mut throttle = SubmitThrottle::default();
        for rating in [1, 5] {
            let decision = gate_submission(&mut throttle, 0, false, rating);
            assert_eq!(decision.action, GateAction::RequireLogin);
        }
        // Both attempts were counted
        assert_eq!(throttle.attempt_count(), 2);
    }

    #[test]
    fn test_third_attempt_proceeds_then_blocks() {
        let mut throttle = SubmitThrottle::default();
        gate_submission(&mut throttle, 0, true, 5);
        gate_submission(&mut throttle, 1_000, true, 5);
        let third = gate_submission(&mut throttle, 2_000, true, 5);
        assert_eq!(third, GateDecision { action: GateAction::Proceed, block_started: true });

        let fourth = gate_submission(&mut throttle, 32_000, true, 5);
        assert_eq!(fourth.action, GateAction::Blocked { remaining_secs: 30 });

        let later = gate_submission(&mut throttle, 62_000, true, 2);
        assert_eq!(later.action, GateAction::ConfirmLowRating);
    }

    #[test]
    fn test_notices() {
        assert_eq!(
            blocked_notice(42),
            "Bạn đã thử gửi quá nhiều lần. Vui lòng thử lại sau 42 giây."
        );
        assert_eq!(block_started_notice(), "Bạn đã thực hiện 3 lần gửi. Tạm khóa gửi 1 phút.");
    }
}
