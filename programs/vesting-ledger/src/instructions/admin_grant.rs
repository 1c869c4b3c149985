use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{GLOBAL_LEDGER_SEED, PARTICIPANT_SEED};
use crate::errors::LedgerError;
use crate::events::PrincipalDeposited;
use crate::ledger::{self, Custody, Transfer, TransferGateway};
use crate::state::{GlobalLedger, ParticipantRecord};
use crate::utils::transfer_into_vault;

/// Admin-funded stake for a participant, e.g. a presale allocation.
/// Opens the participant record if it does not exist yet.
#[derive(Accounts)]
#[instruction(participant: Pubkey)]
pub struct AdminGrant<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_LEDGER_SEED],
        bump = global_ledger.bump,
        has_one = admin @ LedgerError::Unauthorized,
        has_one = token_mint @ LedgerError::VaultMismatch,
        has_one = principal_vault @ LedgerError::VaultMismatch
    )]
    pub global_ledger: Account<'info, GlobalLedger>,

    #[account(
        init_if_needed,
        payer = admin,
        space = ParticipantRecord::SIZE,
        seeds = [PARTICIPANT_SEED, participant.as_ref()],
        bump
    )]
    pub participant_record: Account<'info, ParticipantRecord>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = admin,
    )]
    pub admin_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub principal_vault: InterfaceAccount<'info, TokenAccount>,

    pub token_mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> TransferGateway for AdminGrant<'info> {
    fn available(&self, custody: Custody) -> Result<u64> {
        match custody {
            Custody::External => Ok(self.admin_token_account.amount),
            _ => err!(LedgerError::CustodyUnavailable),
        }
    }

    fn transfer(&mut self, transfer: Transfer) -> Result<()> {
        match (transfer.from, transfer.to) {
            (Custody::External, Custody::PrincipalVault) => transfer_into_vault(
                &self.admin_token_account,
                &self.principal_vault,
                transfer.amount,
                &self.token_mint,
                &self.admin,
                &self.token_program,
            ),
            _ => err!(LedgerError::CustodyUnavailable),
        }
    }
}

pub fn handler(ctx: Context<AdminGrant>, participant: Pubkey, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let admin = ctx.accounts.admin.key();
    let mut global = (*ctx.accounts.global_ledger).clone();
    let mut record = (*ctx.accounts.participant_record).clone();

    let receipt = ledger::grant(
        &mut global,
        &mut record,
        &admin,
        participant,
        amount,
        clock.unix_timestamp,
        ctx.accounts,
    )?;
    record.bump = ctx.bumps.participant_record;

    ctx.accounts.global_ledger.set_inner(global);
    ctx.accounts.participant_record.set_inner(record);

    msg!("Granted {} tokens to {}", amount, participant);
    msg!("Principal: {}, total principal: {}", receipt.principal, receipt.total_principal);

    emit!(PrincipalDeposited {
        owner: participant,
        amount,
        accrued_yield: receipt.accrued_yield,
        principal: receipt.principal,
        total_principal: receipt.total_principal,
        granted: true,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
