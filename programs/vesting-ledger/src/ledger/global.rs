use anchor_lang::prelude::*;

use super::{Custody, Transfer, TransferGateway};
use crate::errors::LedgerError;
use crate::state::GlobalLedger;

pub fn initialize(global: &mut GlobalLedger, admin: Pubkey, annual_rate_bps: u16) -> Result<()> {
    require!(!global.is_initialized(), LedgerError::AlreadyInitialized);

    global.admin = admin;
    global.total_principal = 0;
    global.accumulator = 0;
    global.annual_rate_bps = annual_rate_bps;
    Ok(())
}

/// Account for value already sitting in the treasury by raising the
/// accumulator. Moves no funds. Returns the index increase.
pub fn deposit_value(
    global: &mut GlobalLedger,
    caller: &Pubkey,
    amount: u64,
    total_supply: u64,
) -> Result<u128> {
    global.require_admin(caller)?;
    global.distribute(amount, total_supply)
}

pub fn admin_withdraw<G: TransferGateway>(
    global: &GlobalLedger,
    caller: &Pubkey,
    amount: u64,
    gateway: &mut G,
) -> Result<()> {
    global.require_admin(caller)?;
    require!(amount > 0, LedgerError::InvalidAmount);
    require!(
        gateway.available(Custody::Treasury)? >= amount,
        LedgerError::PoolInsufficient
    );

    gateway.transfer(Transfer::new(Custody::Treasury, Custody::External, amount))
}
