use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Withdrawal amount exceeds currently unlocked principal")]
    ExceedsUnlocked,

    #[msg("No yield available to claim")]
    NothingToClaim,

    #[msg("Reward vault cannot cover the claimed yield")]
    RewardPoolExhausted,

    #[msg("Treasury balance is insufficient")]
    PoolInsufficient,

    #[msg("Total supply must be greater than zero")]
    InvalidTotalSupply,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Ledger already initialized")]
    AlreadyInitialized,

    #[msg("Participant is not registered")]
    NotRegistered,

    #[msg("Participant is already registered")]
    AlreadyRegistered,

    #[msg("Participant record does not belong to this owner")]
    ParticipantMismatch,

    #[msg("Vault account does not match the ledger")]
    VaultMismatch,

    #[msg("Custody area is not available to this instruction")]
    CustodyUnavailable,

    #[msg("Arithmetic overflow")]
    CalculationOverflow,
}
