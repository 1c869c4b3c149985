use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer as SystemTransfer};
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{GLOBAL_LEDGER_SEED, TREASURY_SEED, VAULT_AUTHORITY_SEED};
use crate::errors::LedgerError;
use crate::events::LedgerInitialized;
use crate::ledger;
use crate::state::GlobalLedger;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        space = GlobalLedger::SIZE,
        seeds = [GLOBAL_LEDGER_SEED],
        bump
    )]
    pub global_ledger: Account<'info, GlobalLedger>,

    /// CHECK: PDA owning the principal and reward vaults
    #[account(
        seeds = [VAULT_AUTHORITY_SEED],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// CHECK: System-owned PDA holding reflection lamports, funded here
    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump
    )]
    pub treasury: UncheckedAccount<'info>,

    pub token_mint: InterfaceAccount<'info, Mint>,

    #[account(
        token::mint = token_mint,
        token::authority = vault_authority,
    )]
    pub principal_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        token::mint = token_mint,
        token::authority = vault_authority,
        constraint = reward_vault.key() != principal_vault.key() @ LedgerError::VaultMismatch
    )]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, annual_rate_bps: u16) -> Result<()> {
    let clock = Clock::get()?;
    let mut global = (*ctx.accounts.global_ledger).clone();

    ledger::initialize(&mut global, ctx.accounts.admin.key(), annual_rate_bps)?;
    global.token_mint = ctx.accounts.token_mint.key();
    global.principal_vault = ctx.accounts.principal_vault.key();
    global.reward_vault = ctx.accounts.reward_vault.key();
    global.vault_authority_bump = ctx.bumps.vault_authority;
    global.treasury_bump = ctx.bumps.treasury;
    global.bump = ctx.bumps.global_ledger;

    // Treasury must hold the rent-exempt minimum before it can pay out.
    let rent_floor = Rent::get()?.minimum_balance(0);
    let treasury_lamports = ctx.accounts.treasury.lamports();
    if treasury_lamports < rent_floor {
        let cpi_ctx = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            SystemTransfer {
                from: ctx.accounts.admin.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        );
        system_program::transfer(cpi_ctx, rent_floor - treasury_lamports)?;
    }

    ctx.accounts.global_ledger.set_inner(global);

    let global = &ctx.accounts.global_ledger;
    msg!("Initialized vesting ledger");
    msg!("Admin: {}", global.admin);
    msg!("Token mint: {}", global.token_mint);
    msg!("Annual rate: {} bps", global.annual_rate_bps);

    emit!(LedgerInitialized {
        admin: global.admin,
        token_mint: global.token_mint,
        annual_rate_bps: global.annual_rate_bps,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
