use anchor_lang::prelude::*;

#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub token_mint: Pubkey,
    pub annual_rate_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct ParticipantRegistered {
    pub owner: Pubkey,
    pub checkpoint_index: u128,
    pub timestamp: i64,
}

/// Emitted for participant deposits and admin grants
#[event]
pub struct PrincipalDeposited {
    pub owner: Pubkey,
    pub amount: u64,
    pub accrued_yield: u64,
    pub principal: u64,
    pub total_principal: u64,
    pub granted: bool,
    pub timestamp: i64,
}

#[event]
pub struct PrincipalWithdrawn {
    pub owner: Pubkey,
    pub amount: u64,
    pub principal: u64,
    pub total_principal: u64,
    pub timestamp: i64,
}

#[event]
pub struct YieldClaimed {
    pub owner: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct ValueDeposited {
    pub amount: u64,
    pub total_supply: u64,
    pub index_increase: u128,
    pub accumulator: u128,
    pub timestamp: i64,
}

#[event]
pub struct ReflectionsClaimed {
    pub owner: Pubkey,
    pub amount: u64,
    pub checkpoint_index: u128,
    pub timestamp: i64,
}

#[event]
pub struct TreasuryWithdrawn {
    pub admin: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
