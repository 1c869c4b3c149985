use anchor_lang::prelude::*;

use crate::constants::{GLOBAL_LEDGER_SEED, PARTICIPANT_SEED};
use crate::events::ParticipantRegistered;
use crate::ledger;
use crate::state::{GlobalLedger, ParticipantRecord};

#[derive(Accounts)]
pub struct Register<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

    #[account(
        init,
        payer = participant,
        space = ParticipantRecord::SIZE,
        seeds = [PARTICIPANT_SEED, participant.key().as_ref()],
        bump
    )]
    pub participant_record: Account<'info, ParticipantRecord>,

    #[account(
        seeds = [GLOBAL_LEDGER_SEED],
        bump = global_ledger.bump
    )]
    pub global_ledger: Account<'info, GlobalLedger>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Register>) -> Result<()> {
    let clock = Clock::get()?;
    let mut record = (*ctx.accounts.participant_record).clone();

    ledger::register(
        &ctx.accounts.global_ledger,
        &mut record,
        ctx.accounts.participant.key(),
        clock.unix_timestamp,
    )?;
    record.bump = ctx.bumps.participant_record;

    ctx.accounts.participant_record.set_inner(record);

    let record = &ctx.accounts.participant_record;
    msg!("Registered participant {}", record.owner);
    msg!("Checkpoint index: {}", record.checkpoint_index);

    emit!(ParticipantRegistered {
        owner: record.owner,
        checkpoint_index: record.checkpoint_index,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
