use anchor_lang::prelude::*;

use crate::constants::{FULL_UNLOCK_PERCENT, SECONDS_PER_DAY, UNLOCK_PERCENT_PER_DAY};
use crate::errors::LedgerError;
use crate::math::scaled_mul_div;

/// Principal withdrawable at `now` under the single-timer schedule.
///
/// 10% of the *whole* current principal unlocks per full day since
/// `vesting_start`, reaching 100% on day seven. A `vesting_start` of zero
/// means the vesting clock is inactive and nothing is unlocked.
pub fn unlocked_amount(principal: u64, vesting_start: i64, now: i64) -> Result<u64> {
    if vesting_start == 0 || principal == 0 {
        return Ok(0);
    }

    // Clock running backwards counts as no time elapsed.
    let elapsed = now.saturating_sub(vesting_start).max(0);
    let days = (elapsed / SECONDS_PER_DAY) as u64;
    let percent = days
        .saturating_mul(UNLOCK_PERCENT_PER_DAY)
        .min(FULL_UNLOCK_PERCENT);

    let unlocked = scaled_mul_div(
        principal as u128,
        percent as u128,
        FULL_UNLOCK_PERCENT as u128,
    )
    .ok_or(LedgerError::CalculationOverflow)?;

    let unlocked = u64::try_from(unlocked).map_err(|_| LedgerError::CalculationOverflow)?;
    Ok(unlocked.min(principal))
}
