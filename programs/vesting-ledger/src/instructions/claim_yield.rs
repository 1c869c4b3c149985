use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{GLOBAL_LEDGER_SEED, PARTICIPANT_SEED, VAULT_AUTHORITY_SEED};
use crate::errors::LedgerError;
use crate::events::YieldClaimed;
use crate::ledger::{self, Custody, Transfer, TransferGateway};
use crate::state::{GlobalLedger, ParticipantRecord};
use crate::utils::transfer_from_vault;

#[derive(Accounts)]
pub struct ClaimYield<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

    #[account(
        mut,
        seeds = [PARTICIPANT_SEED, participant.key().as_ref()],
        bump = participant_record.bump
    )]
    pub participant_record: Account<'info, ParticipantRecord>,

    // Read-only: claims do not touch the aggregate counters.
    #[account(
        seeds = [GLOBAL_LEDGER_SEED],
        bump = global_ledger.bump,
        has_one = token_mint @ LedgerError::VaultMismatch,
        has_one = reward_vault @ LedgerError::VaultMismatch
    )]
    pub global_ledger: Account<'info, GlobalLedger>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = participant,
    )]
    pub participant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: PDA authority, signs the transfer out of the reward vault
    #[account(
        seeds = [VAULT_AUTHORITY_SEED],
        bump = global_ledger.vault_authority_bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,

    pub token_mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> TransferGateway for ClaimYield<'info> {
    fn available(&self, custody: Custody) -> Result<u64> {
        match custody {
            Custody::RewardVault => Ok(self.reward_vault.amount),
            _ => err!(LedgerError::CustodyUnavailable),
        }
    }

    fn transfer(&mut self, transfer: Transfer) -> Result<()> {
        match (transfer.from, transfer.to) {
            (Custody::RewardVault, Custody::External) => transfer_from_vault(
                &self.reward_vault,
                &self.participant_token_account,
                transfer.amount,
                &self.token_mint,
                &self.vault_authority,
                self.global_ledger.vault_authority_bump,
                &self.token_program,
            ),
            _ => err!(LedgerError::CustodyUnavailable),
        }
    }
}

pub fn handler(ctx: Context<ClaimYield>) -> Result<()> {
    let clock = Clock::get()?;
    let participant = ctx.accounts.participant.key();
    let global = (*ctx.accounts.global_ledger).clone();
    let mut record = (*ctx.accounts.participant_record).clone();

    let paid = ledger::claim_yield(
        &global,
        &mut record,
        &participant,
        clock.unix_timestamp,
        ctx.accounts,
    )?;

    ctx.accounts.participant_record.set_inner(record);

    msg!("Claimed {} tokens of yield", paid);

    emit!(YieldClaimed {
        owner: participant,
        amount: paid,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
