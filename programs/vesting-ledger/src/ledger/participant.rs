use anchor_lang::prelude::*;

use super::{Custody, Transfer, TransferGateway};
use crate::errors::LedgerError;
use crate::state::{GlobalLedger, ParticipantRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepositReceipt {
    pub amount: u64,
    /// Yield folded into `unclaimed_yield` for the period before the deposit
    pub accrued_yield: u64,
    pub principal: u64,
    pub total_principal: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawReceipt {
    pub amount: u64,
    pub principal: u64,
    pub total_principal: u64,
}

/// Open a dormant record for `owner`.
pub fn register(
    global: &GlobalLedger,
    record: &mut ParticipantRecord,
    owner: Pubkey,
    now: i64,
) -> Result<()> {
    require!(!record.is_registered(), LedgerError::AlreadyRegistered);
    record.open(owner, global.accumulator, now);
    Ok(())
}

pub fn deposit<G: TransferGateway>(
    global: &mut GlobalLedger,
    record: &mut ParticipantRecord,
    caller: &Pubkey,
    amount: u64,
    now: i64,
    gateway: &mut G,
) -> Result<DepositReceipt> {
    require!(amount > 0, LedgerError::InvalidAmount);
    record.require_owner(caller)?;

    increase_principal(global, record, amount, now, gateway)
}

/// Admin-funded deposit on behalf of `participant`, opening the record first
/// if it does not exist yet.
pub fn grant<G: TransferGateway>(
    global: &mut GlobalLedger,
    record: &mut ParticipantRecord,
    caller: &Pubkey,
    participant: Pubkey,
    amount: u64,
    now: i64,
    gateway: &mut G,
) -> Result<DepositReceipt> {
    global.require_admin(caller)?;
    require!(amount > 0, LedgerError::InvalidAmount);

    let mut staged = record.clone();
    if !staged.is_registered() {
        staged.open(participant, global.accumulator, now);
    }
    staged.require_owner(&participant)?;

    let receipt = increase_principal(global, &mut staged, amount, now, gateway)?;
    *record = staged;
    Ok(receipt)
}

/// Settle yield on the old balance, add `amount` and restart the vesting
/// clock for the whole new balance.
fn increase_principal<G: TransferGateway>(
    global: &mut GlobalLedger,
    record: &mut ParticipantRecord,
    amount: u64,
    now: i64,
    gateway: &mut G,
) -> Result<DepositReceipt> {
    let mut next_record = record.clone();
    let mut next_global = global.clone();

    let accrued_yield = next_record.accrue_yield(global.annual_rate_bps, now)?;
    next_record.principal = next_record
        .principal
        .checked_add(amount)
        .ok_or(LedgerError::CalculationOverflow)?;
    next_record.vesting_start = now;
    next_global.add_principal(amount)?;

    gateway.transfer(Transfer::new(Custody::External, Custody::PrincipalVault, amount))?;

    *record = next_record;
    *global = next_global;

    Ok(DepositReceipt {
        amount,
        accrued_yield,
        principal: record.principal,
        total_principal: global.total_principal,
    })
}

pub fn withdraw<G: TransferGateway>(
    global: &mut GlobalLedger,
    record: &mut ParticipantRecord,
    caller: &Pubkey,
    amount: u64,
    now: i64,
    gateway: &mut G,
) -> Result<WithdrawReceipt> {
    require!(amount > 0, LedgerError::InvalidAmount);
    record.require_owner(caller)?;

    let unlocked = record.unlocked_amount(now)?;
    require!(amount <= unlocked, LedgerError::ExceedsUnlocked);

    let mut next_record = record.clone();
    let mut next_global = global.clone();

    next_record.principal = next_record
        .principal
        .checked_sub(amount)
        .ok_or(LedgerError::CalculationOverflow)?;
    if next_record.principal == 0 {
        next_record.vesting_start = 0;
    }
    next_global.sub_principal(amount)?;

    gateway.transfer(Transfer::new(Custody::PrincipalVault, Custody::External, amount))?;

    *record = next_record;
    *global = next_global;

    Ok(WithdrawReceipt {
        amount,
        principal: record.principal,
        total_principal: global.total_principal,
    })
}

/// Pay out all accrued yield. Returns the amount paid.
pub fn claim_yield<G: TransferGateway>(
    global: &GlobalLedger,
    record: &mut ParticipantRecord,
    caller: &Pubkey,
    now: i64,
    gateway: &mut G,
) -> Result<u64> {
    record.require_owner(caller)?;

    let mut next_record = record.clone();
    next_record.accrue_yield(global.annual_rate_bps, now)?;

    let payout = next_record.unclaimed_yield;
    require!(payout > 0, LedgerError::NothingToClaim);
    require!(
        gateway.available(Custody::RewardVault)? >= payout,
        LedgerError::RewardPoolExhausted
    );
    next_record.unclaimed_yield = 0;

    gateway.transfer(Transfer::new(Custody::RewardVault, Custody::External, payout))?;

    *record = next_record;
    Ok(payout)
}

/// Pay out the reflection share accumulated since the last checkpoint and
/// move the checkpoint to the current accumulator. A zero share is not an
/// error: the checkpoint still moves. Returns the amount paid.
pub fn claim_reflections<G: TransferGateway>(
    global: &GlobalLedger,
    record: &mut ParticipantRecord,
    caller: &Pubkey,
    gateway: &mut G,
) -> Result<u64> {
    record.require_owner(caller)?;

    let reward = record.pending_reflection(global.accumulator)?;
    if reward > 0 {
        require!(
            gateway.available(Custody::Treasury)? >= reward,
            LedgerError::PoolInsufficient
        );
        gateway.transfer(Transfer::new(Custody::Treasury, Custody::External, reward))?;
    }

    record.checkpoint_index = global.accumulator;
    Ok(reward)
}
