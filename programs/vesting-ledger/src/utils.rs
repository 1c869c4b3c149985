// external dependencies
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer as SystemTransfer};
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

// local dependencies
use crate::constants::{TREASURY_SEED, VAULT_AUTHORITY_SEED};
use crate::errors::LedgerError;

/// Move tokens from a holder's account into a vault, signed by the holder.
pub fn transfer_into_vault<'info>(
    from: &InterfaceAccount<'info, TokenAccount>,
    vault: &InterfaceAccount<'info, TokenAccount>,
    amount: u64,
    mint: &InterfaceAccount<'info, Mint>,
    authority: &Signer<'info>,
    token_program: &Interface<'info, TokenInterface>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from: from.to_account_info(),
        mint: mint.to_account_info(),
        to: vault.to_account_info(),
        authority: authority.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(token_program.to_account_info(), cpi_accounts);
    transfer_checked(cpi_ctx, amount, mint.decimals)
}

/// Move tokens out of a vault, signed by the vault authority PDA.
pub fn transfer_from_vault<'info>(
    vault: &InterfaceAccount<'info, TokenAccount>,
    to: &InterfaceAccount<'info, TokenAccount>,
    amount: u64,
    mint: &InterfaceAccount<'info, Mint>,
    vault_authority: &UncheckedAccount<'info>,
    vault_authority_bump: u8,
    token_program: &Interface<'info, TokenInterface>,
) -> Result<()> {
    let seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY_SEED, &[vault_authority_bump]]];

    let cpi_accounts = TransferChecked {
        from: vault.to_account_info(),
        mint: mint.to_account_info(),
        to: to.to_account_info(),
        authority: vault_authority.to_account_info(),
    };
    let cpi_ctx =
        CpiContext::new_with_signer(token_program.to_account_info(), cpi_accounts, seeds);
    transfer_checked(cpi_ctx, amount, mint.decimals)
}

/// Lamports the treasury can pay out while staying rent exempt.
pub fn treasury_available(treasury: &AccountInfo) -> Result<u64> {
    let rent_floor = Rent::get()?.minimum_balance(0);
    Ok(treasury.lamports().saturating_sub(rent_floor))
}

/// Pay lamports out of the treasury PDA.
pub fn pay_from_treasury<'info>(
    treasury: &UncheckedAccount<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
    treasury_bump: u8,
    system_program: &Program<'info, System>,
) -> Result<()> {
    require!(
        treasury_available(treasury)? >= amount,
        LedgerError::PoolInsufficient
    );

    let seeds: &[&[&[u8]]] = &[&[TREASURY_SEED, &[treasury_bump]]];
    let cpi_ctx = CpiContext::new_with_signer(
        system_program.to_account_info(),
        SystemTransfer {
            from: treasury.to_account_info(),
            to: to.clone(),
        },
        seeds,
    );
    system_program::transfer(cpi_ctx, amount)
}
