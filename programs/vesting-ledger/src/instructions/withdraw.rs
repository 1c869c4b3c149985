use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{GLOBAL_LEDGER_SEED, PARTICIPANT_SEED, VAULT_AUTHORITY_SEED};
use crate::errors::LedgerError;
use crate::events::PrincipalWithdrawn;
use crate::ledger::{self, Custody, Transfer, TransferGateway};
use crate::state::{GlobalLedger, ParticipantRecord};
use crate::utils::transfer_from_vault;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

    #[account(
        mut,
        seeds = [PARTICIPANT_SEED, participant.key().as_ref()],
        bump = participant_record.bump
    )]
    pub participant_record: Account<'info, ParticipantRecord>,

    #[account(
        mut,
        seeds = [GLOBAL_LEDGER_SEED],
        bump = global_ledger.bump,
        has_one = token_mint @ LedgerError::VaultMismatch,
        has_one = principal_vault @ LedgerError::VaultMismatch
    )]
    pub global_ledger: Account<'info, GlobalLedger>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = participant,
    )]
    pub participant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: PDA authority, signs the transfer out of the vault
    #[account(
        seeds = [VAULT_AUTHORITY_SEED],
        bump = global_ledger.vault_authority_bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub principal_vault: InterfaceAccount<'info, TokenAccount>,

    pub token_mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> TransferGateway for Withdraw<'info> {
    fn available(&self, custody: Custody) -> Result<u64> {
        match custody {
            Custody::PrincipalVault => Ok(self.principal_vault.amount),
            _ => err!(LedgerError::CustodyUnavailable),
        }
    }

    fn transfer(&mut self, transfer: Transfer) -> Result<()> {
        match (transfer.from, transfer.to) {
            (Custody::PrincipalVault, Custody::External) => transfer_from_vault(
                &self.principal_vault,
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

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let participant = ctx.accounts.participant.key();
    let mut global = (*ctx.accounts.global_ledger).clone();
    let mut record = (*ctx.accounts.participant_record).clone();

    let receipt = ledger::withdraw(
        &mut global,
        &mut record,
        &participant,
        amount,
        clock.unix_timestamp,
        ctx.accounts,
    )?;

    ctx.accounts.global_ledger.set_inner(global);
    ctx.accounts.participant_record.set_inner(record);

    msg!("Withdrew {} tokens", amount);
    msg!("Remaining: {}", receipt.principal);

    emit!(PrincipalWithdrawn {
        owner: participant,
        amount,
        principal: receipt.principal,
        total_principal: receipt.total_principal,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
