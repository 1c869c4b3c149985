use anchor_lang::prelude::*;

pub mod calculators;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod math;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("D289VwM6aNZfCEiriwQMTADhvF7ZRzoZDUpsrafJx6Mh");

/// Vesting Ledger Program
///
/// Participants stake a token into a shared pool and earn from three
/// coupled mechanisms:
/// - principal unlocks 10% per day over a week from the last deposit
/// - yield accrues continuously at a fixed annual rate
/// - externally sourced SOL is distributed pro rata through a cumulative index
#[program]
pub mod vesting_ledger {
    use super::*;

    /// Create the global ledger and fund the treasury (one-time admin setup)
    pub fn initialize(ctx: Context<Initialize>, annual_rate_bps: u16) -> Result<()> {
        instructions::initialize::handler(ctx, annual_rate_bps)
    }

    /// Open a dormant participant record
    pub fn register(ctx: Context<Register>) -> Result<()> {
        instructions::register::handler(ctx)
    }

    /// Stake admin-held tokens on behalf of a participant
    pub fn admin_grant(ctx: Context<AdminGrant>, participant: Pubkey, amount: u64) -> Result<()> {
        instructions::admin_grant::handler(ctx, participant, amount)
    }

    /// Stake tokens, restarting the unlock schedule for the whole balance
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Withdraw unlocked principal
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    /// Claim accrued staking yield
    pub fn claim_yield(ctx: Context<ClaimYield>) -> Result<()> {
        instructions::claim_yield::handler(ctx)
    }

    /// Raise the reflection index for SOL already sent to the treasury
    pub fn deposit_value(ctx: Context<DepositValue>, amount: u64, total_supply: u64) -> Result<()> {
        instructions::deposit_value::handler(ctx, amount, total_supply)
    }

    /// Claim reflections accumulated since the last checkpoint
    pub fn claim_reflections(ctx: Context<ClaimReflections>) -> Result<()> {
        instructions::claim_reflections::handler(ctx)
    }

    /// Move SOL out of the treasury to the admin
    pub fn admin_withdraw(ctx: Context<AdminWithdraw>, amount: u64) -> Result<()> {
        instructions::admin_withdraw::handler(ctx, amount)
    }
}
