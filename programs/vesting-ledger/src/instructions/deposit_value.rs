use anchor_lang::prelude::*;

use crate::constants::{GLOBAL_LEDGER_SEED, TREASURY_SEED};
use crate::errors::LedgerError;
use crate::events::ValueDeposited;
use crate::ledger;
use crate::state::GlobalLedger;
use crate::utils::treasury_available;

/// Record value that has already been sent to the treasury (typically fees
/// converted to SOL off-chain) by raising the reflection accumulator.
#[derive(Accounts)]
pub struct DepositValue<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_LEDGER_SEED],
        bump = global_ledger.bump,
        has_one = admin @ LedgerError::Unauthorized
    )]
    pub global_ledger: Account<'info, GlobalLedger>,

    /// CHECK: Treasury PDA, only read for logging
    #[account(
        seeds = [TREASURY_SEED],
        bump = global_ledger.treasury_bump
    )]
    pub treasury: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<DepositValue>, amount: u64, total_supply: u64) -> Result<()> {
    let clock = Clock::get()?;
    let mut global = (*ctx.accounts.global_ledger).clone();

    msg!(
        "Calculating index increase: amount = {}, total_supply = {}",
        amount,
        total_supply
    );

    let index_increase =
        ledger::deposit_value(&mut global, &ctx.accounts.admin.key(), amount, total_supply)?;

    ctx.accounts.global_ledger.set_inner(global);

    let accumulator = ctx.accounts.global_ledger.accumulator;
    msg!("Index increase: {}", index_increase);
    msg!("New accumulator: {}", accumulator);
    msg!(
        "Treasury available: {}",
        treasury_available(&ctx.accounts.treasury)?
    );

    emit!(ValueDeposited {
        amount,
        total_supply,
        index_increase,
        accumulator,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
