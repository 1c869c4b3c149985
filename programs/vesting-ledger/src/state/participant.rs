use anchor_lang::prelude::*;

use crate::calculators::{accrued_yield, pending_reflection, unlocked_amount};
use crate::errors::LedgerError;

/// A participant's principal, vesting clock and reward checkpoints
/// PDA: ["participant", owner]
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct ParticipantRecord {
    /// Participant identity
    pub owner: Pubkey,

    /// Currently staked amount
    pub principal: u64,

    /// Start of the unlock schedule, 0 while nothing is staked
    pub vesting_start: i64,

    /// Accumulator value at the last reflection settlement
    pub checkpoint_index: u128,

    /// Yield accrued but not yet paid out
    pub unclaimed_yield: u64,

    /// Timestamp yield was last accrued up to
    pub last_yield_time: i64,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Reserved for future use
    pub _reserved: [u8; 32],
}

impl ParticipantRecord {
    pub const SIZE: usize = 8 + // discriminator
        32 + // owner
        8 +  // principal
        8 +  // vesting_start
        16 + // checkpoint_index
        8 +  // unclaimed_yield
        8 +  // last_yield_time
        1 +  // bump
        32;  // reserved

    pub fn is_registered(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Fails unless the record exists and belongs to `owner`.
    pub fn require_owner(&self, owner: &Pubkey) -> Result<()> {
        require!(self.is_registered(), LedgerError::NotRegistered);
        require_keys_eq!(self.owner, *owner, LedgerError::ParticipantMismatch);
        Ok(())
    }

    /// Start a dormant record synchronized with the current accumulator.
    pub fn open(&mut self, owner: Pubkey, accumulator: u128, now: i64) {
        self.owner = owner;
        self.principal = 0;
        self.vesting_start = 0;
        self.checkpoint_index = accumulator;
        self.unclaimed_yield = 0;
        self.last_yield_time = now;
    }

    pub fn unlocked_amount(&self, now: i64) -> Result<u64> {
        unlocked_amount(self.principal, self.vesting_start, now)
    }

    pub fn accrued_yield(&self, annual_rate_bps: u16, now: i64) -> Result<u64> {
        accrued_yield(self.principal, annual_rate_bps, self.last_yield_time, now)
    }

    pub fn pending_reflection(&self, accumulator: u128) -> Result<u64> {
        pending_reflection(self.principal, self.checkpoint_index, accumulator)
    }

    /// Fold yield earned up to `now` into `unclaimed_yield` and restart the
    /// accrual period. Returns the amount added.
    pub fn accrue_yield(&mut self, annual_rate_bps: u16, now: i64) -> Result<u64> {
        let accrued = self.accrued_yield(annual_rate_bps, now)?;
        self.unclaimed_yield = self
            .unclaimed_yield
            .checked_add(accrued)
            .ok_or(LedgerError::CalculationOverflow)?;
        self.last_yield_time = now;
        Ok(accrued)
    }
}
