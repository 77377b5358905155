//! Release-schedule registry and the unlock calculator.
//!
//! The calculator is a pure function of (commencement, now, amount, schedule).
//! It releases the initial basis-point tranche at `commencement + delay`, then
//! spreads the remainder over the following periods with a single
//! multiply-then-divide: `remaining * periods_elapsed / remaining_periods`.
//! Dividing once over the whole elapsed-period count (instead of truncating a
//! per-period slice and multiplying it back up) avoids compounding rounding
//! loss and delivers exactly `total_amount` once every period has elapsed.

use soroban_sdk::Env;

use crate::errors::Error;
use crate::types::{DataKey, ReleaseSchedule};

pub const BIPS_DENOMINATOR: i128 = 10_000;

/// Maximum number of addresses that may cancel a single timelock.
pub const MAX_CANCELERS: u32 = 10;

pub fn validate(schedule: &ReleaseSchedule, max_release_delay: u64) -> Result<(), Error> {
    if schedule.release_count < 1 {
        return Err(Error::EmptySchedule);
    }
    if schedule.initial_release_portion_bips as i128 > BIPS_DENOMINATOR {
        return Err(Error::InitialReleaseExceedsMax);
    }
    if schedule.release_count == 1 && schedule.initial_release_portion_bips as i128 != BIPS_DENOMINATOR
    {
        return Err(Error::SingleBatchMustReleaseAll);
    }
    if schedule.release_count > 1 && schedule.period_between_releases < 1 {
        return Err(Error::ZeroPeriod);
    }
    if schedule.delay_until_first_release > max_release_delay {
        return Err(Error::FirstReleaseExceedsMaxDelay);
    }
    Ok(())
}

/// Amount of `total_amount` unlocked at `now` for a timelock commencing at
/// `commencement`. Monotonically non-decreasing in `now`; reaches
/// `total_amount` exactly at `commencement + delay + (release_count - 1) * period`.
pub fn unlocked(
    commencement: u64,
    now: u64,
    total_amount: i128,
    schedule: &ReleaseSchedule,
) -> Result<i128, Error> {
    let first_release_at = match commencement.checked_add(schedule.delay_until_first_release) {
        Some(ts) => ts,
        // First release is beyond the representable clock: nothing unlocks.
        None => return Ok(0),
    };
    if now < first_release_at {
        return Ok(0);
    }

    let initial = total_amount
        .checked_mul(schedule.initial_release_portion_bips as i128)
        .ok_or(Error::MathOverflow)?
        / BIPS_DENOMINATOR;

    let remaining_periods = (schedule.release_count - 1) as u64;
    if remaining_periods == 0 {
        return Ok(total_amount);
    }

    // period_between_releases >= 1 is guaranteed by `validate` for any stored
    // schedule with more than one release.
    let elapsed = now - first_release_at;
    let periods_elapsed = (elapsed / schedule.period_between_releases).min(remaining_periods);

    let remaining = total_amount - initial;
    let accrued = remaining
        .checked_mul(periods_elapsed as i128)
        .ok_or(Error::MathOverflow)?
        / remaining_periods as i128;

    initial.checked_add(accrued).ok_or(Error::MathOverflow)
}

// --- registry storage (append-only) ---

pub fn count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ScheduleCount)
        .unwrap_or(0)
}

pub fn by_id(env: &Env, schedule_id: u64) -> Result<ReleaseSchedule, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Schedule(schedule_id))
        .ok_or(Error::UnknownSchedule)
}

/// Appends a validated template and returns its id (= previous count).
pub fn create(env: &Env, schedule: &ReleaseSchedule) -> u64 {
    let schedule_id = count(env);
    env.storage()
        .persistent()
        .set(&DataKey::Schedule(schedule_id), schedule);
    env.storage()
        .instance()
        .set(&DataKey::ScheduleCount, &(schedule_id + 1));
    schedule_id
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: u64 = 24 * 3600;

    fn schedule(count: u32, delay: u64, bips: u32, period: u64) -> ReleaseSchedule {
        ReleaseSchedule {
            release_count: count,
            delay_until_first_release: delay,
            initial_release_portion_bips: bips,
            period_between_releases: period,
        }
    }

    #[test]
    fn half_now_half_after_one_period() {
        let s = schedule(2, 0, 5000, 30 * DAY);
        assert_eq!(unlocked(100, 100, 100, &s).unwrap(), 50);
        assert_eq!(unlocked(100, 100 + 30 * DAY, 100, &s).unwrap(), 100);
    }

    #[test]
    fn eight_percent_then_quarterly() {
        let s = schedule(4, 0, 800, 90 * DAY);
        let c = 1_000;
        assert_eq!(unlocked(c, c, 100, &s).unwrap(), 8);
        assert_eq!(unlocked(c, c + 90 * DAY, 100, &s).unwrap(), 38);
        assert_eq!(unlocked(c, c + 180 * DAY, 100, &s).unwrap(), 69);
        assert_eq!(unlocked(c, c + 270 * DAY, 100, &s).unwrap(), 100);
    }

    #[test]
    fn uneven_remainder_spreads_across_periods() {
        let s = schedule(5, 0, 770, 90 * DAY);
        let c = 1_000;
        assert_eq!(unlocked(c, c, 1000, &s).unwrap(), 77);
        assert_eq!(unlocked(c, c + 90 * DAY, 1000, &s).unwrap(), 307);
        assert_eq!(unlocked(c, c + 180 * DAY, 1000, &s).unwrap(), 538);
        assert_eq!(unlocked(c, c + 270 * DAY, 1000, &s).unwrap(), 769);
        assert_eq!(unlocked(c, c + 360 * DAY, 1000, &s).unwrap(), 1000);
    }

    #[test]
    fn nothing_unlocks_before_the_delay() {
        let s = schedule(2, 3600, 5000, DAY);
        assert_eq!(unlocked(1_000, 1_000, 100, &s).unwrap(), 0);
        assert_eq!(unlocked(1_000, 1_000 + 3599, 100, &s).unwrap(), 0);
        assert_eq!(unlocked(1_000, 1_000 + 3600, 100, &s).unwrap(), 50);
    }

    #[test]
    fn single_batch_vests_fully_at_the_delay_boundary() {
        let s = schedule(1, 3600, 10_000, 0);
        assert_eq!(unlocked(0, 3599, 1_000_000, &s).unwrap(), 0);
        assert_eq!(unlocked(0, 3600, 1_000_000, &s).unwrap(), 1_000_000);
    }

    #[test]
    fn unlocked_is_monotonic_and_exact_at_horizon() {
        let s = schedule(7, DAY, 433, 11 * DAY);
        let c = 50_000;
        let total: i128 = 999_983;
        let horizon = c + DAY + 6 * 11 * DAY;
        let mut last = 0i128;
        let mut t = c;
        while t <= horizon + DAY {
            let u = unlocked(c, t, total, &s).unwrap();
            assert!(u >= last, "unlock curve went backwards at t={}", t);
            assert!(u <= total);
            last = u;
            t += 6 * 3600;
        }
        assert_eq!(unlocked(c, horizon, total, &s).unwrap(), total);
    }

    #[test]
    fn validate_rejects_malformed_templates() {
        assert_eq!(
            validate(&schedule(0, 1, 1, 1), u64::MAX),
            Err(Error::EmptySchedule)
        );
        assert_eq!(
            validate(&schedule(1, 0, 9999, 1), u64::MAX),
            Err(Error::SingleBatchMustReleaseAll)
        );
        assert_eq!(
            validate(&schedule(1, 0, 10_001, 1), u64::MAX),
            Err(Error::InitialReleaseExceedsMax)
        );
        assert_eq!(
            validate(&schedule(2, 2, 5000, 0), u64::MAX),
            Err(Error::ZeroPeriod)
        );
        assert_eq!(
            validate(&schedule(2, 1_000_001, 1, 1), 1_000_000),
            Err(Error::FirstReleaseExceedsMaxDelay)
        );
        assert_eq!(validate(&schedule(1, 0, 10_000, 1), u64::MAX), Ok(()));
        assert_eq!(validate(&schedule(2, 1_000_000, 1, 1), 1_000_000), Ok(()));
    }
}
