use anchor_lang::prelude::*;

use crate::constants::{GLOBAL_LEDGER_SEED, TREASURY_SEED};
use crate::errors::LedgerError;
use crate::events::TreasuryWithdrawn;
use crate::ledger::{self, Custody, Transfer, TransferGateway};
use crate::state::GlobalLedger;
use crate::utils::{pay_from_treasury, treasury_available};

#[derive(Accounts)]
pub struct AdminWithdraw<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [GLOBAL_LEDGER_SEED],
        bump = global_ledger.bump,
        has_one = admin @ LedgerError::Unauthorized
    )]
    pub global_ledger: Account<'info, GlobalLedger>,

    /// CHECK: Treasury PDA, signs the lamport transfer
    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = global_ledger.treasury_bump
    )]
    pub treasury: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> TransferGateway for AdminWithdraw<'info> {
    fn available(&self, custody: Custody) -> Result<u64> {
        match custody {
            Custody::Treasury => treasury_available(&self.treasury),
            _ => err!(LedgerError::CustodyUnavailable),
        }
    }

    fn transfer(&mut self, transfer: Transfer) -> Result<()> {
        match (transfer.from, transfer.to) {
            (Custody::Treasury, Custody::External) => pay_from_treasury(
                &self.treasury,
                &self.admin.to_account_info(),
                transfer.amount,
                self.global_ledger.treasury_bump,
                &self.system_program,
            ),
            _ => err!(LedgerError::CustodyUnavailable),
        }
    }
}

pub fn handler(ctx: Context<AdminWithdraw>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let admin = ctx.accounts.admin.key();
    let global = (*ctx.accounts.global_ledger).clone();

    ledger::admin_withdraw(&global, &admin, amount, ctx.accounts)?;

    msg!("Withdrew {} lamports from treasury", amount);

    emit!(TreasuryWithdrawn {
        admin,
        amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
