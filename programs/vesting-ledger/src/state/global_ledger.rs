use anchor_lang::prelude::*;

use crate::calculators::index_increase;
use crate::errors::LedgerError;

/// Aggregate ledger state shared by every participant
/// PDA: ["global-ledger"]
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct GlobalLedger {
    /// Identity allowed to run privileged instructions
    pub admin: Pubkey,

    /// Mint of the staked token (yield is paid in the same token)
    pub token_mint: Pubkey,

    /// Token account holding all participants' principal
    pub principal_vault: Pubkey,

    /// Token account yield is paid from
    pub reward_vault: Pubkey,

    /// Sum of every participant's principal
    pub total_principal: u64,

    /// Reflection value distributed per unit of total supply, scaled by 1e12.
    /// Never decreases.
    pub accumulator: u128,

    /// Annual yield rate in basis points
    pub annual_rate_bps: u16,

    /// Bump of the PDA that owns both vaults
    pub vault_authority_bump: u8,

    /// Bump of the SOL treasury PDA
    pub treasury_bump: u8,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Reserved for future use
    pub _reserved: [u8; 32],
}

impl GlobalLedger {
    pub const SIZE: usize = 8 + // discriminator
        32 + // admin
        32 + // token_mint
        32 + // principal_vault
        32 + // reward_vault
        8 +  // total_principal
        16 + // accumulator
        2 +  // annual_rate_bps
        1 +  // vault_authority_bump
        1 +  // treasury_bump
        1 +  // bump
        32;  // reserved

    pub fn is_initialized(&self) -> bool {
        self.admin != Pubkey::default()
    }

    pub fn require_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.admin, *caller, LedgerError::Unauthorized);
        Ok(())
    }

    pub fn add_principal(&mut self, amount: u64) -> Result<()> {
        self.total_principal = self
            .total_principal
            .checked_add(amount)
            .ok_or(LedgerError::CalculationOverflow)?;
        Ok(())
    }

    pub fn sub_principal(&mut self, amount: u64) -> Result<()> {
        self.total_principal = self
            .total_principal
            .checked_sub(amount)
            .ok_or(LedgerError::CalculationOverflow)?;
        Ok(())
    }

    /// Raise the accumulator for `amount` of value spread over `total_supply`.
    /// Returns the increase applied.
    pub fn distribute(&mut self, amount: u64, total_supply: u64) -> Result<u128> {
        let increase = index_increase(amount, total_supply)?;
        self.accumulator = self
            .accumulator
            .checked_add(increase)
            .ok_or(LedgerError::CalculationOverflow)?;
        Ok(increase)
    }
}
