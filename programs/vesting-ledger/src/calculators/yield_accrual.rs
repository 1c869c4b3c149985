use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, SECONDS_PER_YEAR};
use crate::errors::LedgerError;
use crate::math::scaled_mul_div;

/// Simple-interest yield on `principal` at `annual_rate_bps` between
/// `last_yield_time` and `now`.
///
/// The triple product `principal * rate * elapsed` can exceed 128 bits for
/// large balances held over long periods, so it goes through the wide
/// intermediate helper.
pub fn accrued_yield(
    principal: u64,
    annual_rate_bps: u16,
    last_yield_time: i64,
    now: i64,
) -> Result<u64> {
    let elapsed = now.saturating_sub(last_yield_time).max(0) as u128;
    if principal == 0 || annual_rate_bps == 0 || elapsed == 0 {
        return Ok(0);
    }

    let principal_rate = (principal as u128) * (annual_rate_bps as u128);
    let accrued = scaled_mul_div(principal_rate, elapsed, SECONDS_PER_YEAR * BPS_DENOMINATOR)
        .ok_or(LedgerError::CalculationOverflow)?;

    u64::try_from(accrued).map_err(|_| LedgerError::CalculationOverflow.into())
}
