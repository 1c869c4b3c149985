use anchor_lang::prelude::*;

use crate::constants::{GLOBAL_LEDGER_SEED, PARTICIPANT_SEED, TREASURY_SEED};
use crate::errors::LedgerError;
use crate::events::ReflectionsClaimed;
use crate::ledger::{self, Custody, Transfer, TransferGateway};
use crate::state::{GlobalLedger, ParticipantRecord};
use crate::utils::{pay_from_treasury, treasury_available};

#[derive(Accounts)]
pub struct ClaimReflections<'info> {
    /// Also the recipient of the lamports
    #[account(mut)]
    pub participant: Signer<'info>,

    #[account(
        mut,
        seeds = [PARTICIPANT_SEED, participant.key().as_ref()],
        bump = participant_record.bump
    )]
    pub participant_record: Account<'info, ParticipantRecord>,

    #[account(
        seeds = [GLOBAL_LEDGER_SEED],
        bump = global_ledger.bump
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

impl<'info> TransferGateway for ClaimReflections<'info> {
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
                &self.participant.to_account_info(),
                transfer.amount,
                self.global_ledger.treasury_bump,
                &self.system_program,
            ),
            _ => err!(LedgerError::CustodyUnavailable),
        }
    }
}

pub fn handler(ctx: Context<ClaimReflections>) -> Result<()> {
    let clock = Clock::get()?;
    let participant = ctx.accounts.participant.key();
    let global = (*ctx.accounts.global_ledger).clone();
    let mut record = (*ctx.accounts.participant_record).clone();

    let paid = ledger::claim_reflections(&global, &mut record, &participant, ctx.accounts)?;

    ctx.accounts.participant_record.set_inner(record);

    if paid == 0 {
        msg!("No reflections accumulated, checkpoint synced to {}", global.accumulator);
    } else {
        msg!("Claimed {} lamports of reflections", paid);
    }

    emit!(ReflectionsClaimed {
        owner: participant,
        amount: paid,
        checkpoint_index: global.accumulator,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
