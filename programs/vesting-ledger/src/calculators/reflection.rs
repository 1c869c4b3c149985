use anchor_lang::prelude::*;

use crate::constants::ACCUMULATOR_SCALE;
use crate::errors::LedgerError;
use crate::math::scaled_mul_div;

/// Accumulator increase for `amount` of distributed value.
///
/// Normalized against the total circulating supply rather than staked
/// principal, so it still moves when nothing is staked.
pub fn index_increase(amount: u64, total_supply: u64) -> Result<u128> {
    require!(total_supply > 0, LedgerError::InvalidTotalSupply);

    let increase = scaled_mul_div(amount as u128, ACCUMULATOR_SCALE, total_supply as u128)
        .ok_or(LedgerError::CalculationOverflow)?;
    Ok(increase)
}

/// Reflection value owed to `principal` between `checkpoint_index` and the
/// current `accumulator`.
pub fn pending_reflection(principal: u64, checkpoint_index: u128, accumulator: u128) -> Result<u64> {
    // Checkpoints are always taken from the accumulator, which never decreases.
    let delta = accumulator
        .checked_sub(checkpoint_index)
        .ok_or(LedgerError::CalculationOverflow)?;
    if delta == 0 || principal == 0 {
        return Ok(0);
    }

    let reward = scaled_mul_div(principal as u128, delta, ACCUMULATOR_SCALE)
        .ok_or(LedgerError::CalculationOverflow)?;
    u64::try_from(reward).map_err(|_| LedgerError::CalculationOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_increase_against_supply() {
        let increase = index_increase(2_000_000_000, 1_000_000_000_000_000).unwrap();
        assert_eq!(increase, 2_000_000);
    }

    #[test]
    fn test_zero_supply_is_rejected() {
        let err = index_increase(1_000, 0).unwrap_err();
        assert_eq!(err, LedgerError::InvalidTotalSupply.into());
    }

    #[test]
    fn test_index_increase_floors() {
        // 1 * 1e12 / 3
        assert_eq!(index_increase(1, 3).unwrap(), 333_333_333_333);
        assert_eq!(index_increase(0, 3).unwrap(), 0);
    }

    #[test]
    fn test_pending_reflection_pro_rata() {
        // Index of 2e6 on a 1e12 scale pays 2e-6 per unit of principal.
        assert_eq!(pending_reflection(1_000_000, 0, 2_000_000).unwrap(), 2);
        assert_eq!(pending_reflection(500_000_000, 1_000_000, 3_000_000).unwrap(), 1_000);
        assert_eq!(pending_reflection(1_000, 5, 5).unwrap(), 0);
        assert_eq!(pending_reflection(0, 0, 5_000_000).unwrap(), 0);
    }

    #[test]
    fn test_pending_reflection_with_accumulator_beyond_u64() {
        let accumulator = (u64::MAX as u128) * 4;
        let reward = pending_reflection(u64::MAX, 0, accumulator).unwrap_err();
        assert_eq!(reward, LedgerError::CalculationOverflow.into());

        let reward = pending_reflection(1_000_000, 0, accumulator).unwrap();
        assert_eq!(reward as u128, 1_000_000 * accumulator / ACCUMULATOR_SCALE);
    }

    #[test]
    fn test_checkpoint_ahead_of_accumulator_is_rejected() {
        assert!(pending_reflection(1, 10, 9).is_err());
    }
}
