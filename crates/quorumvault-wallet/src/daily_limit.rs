//! Daily limit tracker — the under-quorum spending allowance.
//!
//! The window is a UTC day-index truncation, not a sliding 24h window.
//! Rollover is lazy: the counter resets the next time a check runs after
//! the day index advances, never via a background timer. Missed days are
//! not caught up individually — the window simply restarts.

use chrono::{DateTime, Utc};
use quorumvault_types::constants::SECONDS_PER_DAY;
use rust_decimal::Decimal;

/// Outcome of a reservation attempt against the daily allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveOutcome {
    /// The value fit under the remaining allowance and was debited.
    Reserved,
    /// The value exceeds the remaining allowance; nothing was mutated.
    Rejected,
}

/// Day index for a point in time (days since the UNIX epoch, UTC).
#[must_use]
pub fn day_index(now: DateTime<Utc>) -> i64 {
    now.timestamp().div_euclid(SECONDS_PER_DAY)
}

/// Tracks the configured daily allowance and the amount spent in the
/// current day window.
///
/// Invariant: `spent_today <= allowance` whenever `last_reset_day` equals
/// the current day index.
#[derive(Debug, Clone)]
pub struct DailyLimitTracker {
    allowance: Decimal,
    spent_today: Decimal,
    last_reset_day: i64,
}

impl DailyLimitTracker {
    #[must_use]
    pub fn new(allowance: Decimal, now: DateTime<Utc>) -> Self {
        Self {
            allowance,
            spent_today: Decimal::ZERO,
            last_reset_day: day_index(now),
        }
    }

    /// Try to debit `value` from the remaining allowance.
    ///
    /// A granted reservation is unconditional: it is not refunded if the
    /// downstream transfer later fails. A rejection mutates nothing.
    pub fn try_reserve(&mut self, value: Decimal, now: DateTime<Utc>) -> ReserveOutcome {
        self.roll_over(now);
        if self.spent_today + value <= self.allowance {
            self.spent_today += value;
            ReserveOutcome::Reserved
        } else {
            ReserveOutcome::Rejected
        }
    }

    /// Remaining allowance for the day containing `now`, without mutating.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> Decimal {
        if day_index(now) != self.last_reset_day {
            self.allowance
        } else {
            self.allowance - self.spent_today
        }
    }

    /// Amount spent in the day containing `now`, without mutating.
    #[must_use]
    pub fn spent_today(&self, now: DateTime<Utc>) -> Decimal {
        if day_index(now) != self.last_reset_day {
            Decimal::ZERO
        } else {
            self.spent_today
        }
    }

    /// The configured per-day allowance.
    #[must_use]
    pub fn allowance(&self) -> Decimal {
        self.allowance
    }

    fn roll_over(&mut self, now: DateTime<Utc>) {
        let today = day_index(now);
        if today != self.last_reset_day {
            self.spent_today = Decimal::ZERO;
            self.last_reset_day = today;
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn tracker(allowance: &str) -> DailyLimitTracker {
        DailyLimitTracker::new(allowance.parse().unwrap(), t0())
    }

    #[test]
    fn reserve_within_allowance() {
        let mut dl = tracker("0.7");
        assert_eq!(dl.try_reserve("0.4".parse().unwrap(), t0()), ReserveOutcome::Reserved);
        assert_eq!(dl.spent_today(t0()), "0.4".parse().unwrap());
        assert_eq!(dl.remaining(t0()), "0.3".parse().unwrap());
    }

    #[test]
    fn reject_leaves_state_untouched() {
        let mut dl = tracker("0.7");
        dl.try_reserve("0.4".parse().unwrap(), t0());
        assert_eq!(dl.try_reserve("0.5".parse().unwrap(), t0()), ReserveOutcome::Rejected);
        assert_eq!(dl.spent_today(t0()), "0.4".parse().unwrap());
        assert_eq!(dl.remaining(t0()), "0.3".parse().unwrap());
    }

    #[test]
    fn exact_remaining_fits() {
        let mut dl = tracker("0.7");
        dl.try_reserve("0.4".parse().unwrap(), t0());
        assert_eq!(dl.try_reserve("0.3".parse().unwrap(), t0()), ReserveOutcome::Reserved);
        assert_eq!(dl.remaining(t0()), Decimal::ZERO);
    }

    #[test]
    fn lazy_rollover_resets_counter() {
        let mut dl = tracker("0.7");
        dl.try_reserve("0.7".parse().unwrap(), t0());
        assert_eq!(dl.try_reserve("0.1".parse().unwrap(), t0()), ReserveOutcome::Rejected);

        let tomorrow = t0() + Duration::days(1);
        assert_eq!(dl.remaining(tomorrow), "0.7".parse().unwrap());
        assert_eq!(dl.spent_today(tomorrow), Decimal::ZERO);
        assert_eq!(dl.try_reserve("0.6".parse().unwrap(), tomorrow), ReserveOutcome::Reserved);
        assert_eq!(dl.spent_today(tomorrow), "0.6".parse().unwrap());
    }

    #[test]
    fn multi_day_gap_restarts_window_once() {
        let mut dl = tracker("1");
        dl.try_reserve(Decimal::ONE, t0());

        // A week later the window restarts; the skipped days grant nothing
        // cumulative.
        let later = t0() + Duration::days(7);
        assert_eq!(dl.try_reserve(Decimal::ONE, later), ReserveOutcome::Reserved);
        assert_eq!(dl.try_reserve(Decimal::ONE, later), ReserveOutcome::Rejected);
    }

    #[test]
    fn day_boundary_is_utc_midnight() {
        let before = Utc.with_ymd_and_hms(2026, 3, 1, 23, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
        assert_eq!(day_index(after), day_index(before) + 1);
    }

    #[test]
    fn zero_allowance_rejects_everything_but_zero() {
        let mut dl = tracker("0");
        assert_eq!(dl.try_reserve("0.1".parse().unwrap(), t0()), ReserveOutcome::Rejected);
        assert_eq!(dl.try_reserve(Decimal::ZERO, t0()), ReserveOutcome::Reserved);
    }
}
