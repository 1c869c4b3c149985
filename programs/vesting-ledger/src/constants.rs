use anchor_lang::prelude::*;

pub const SECONDS_PER_DAY: i64 = 86_400;

pub const SECONDS_PER_YEAR: u128 = 365 * 24 * 60 * 60;

/// Basis points in 100%.
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Share of principal that unlocks per full day after the vesting clock starts.
pub const UNLOCK_PERCENT_PER_DAY: u64 = 10;

pub const FULL_UNLOCK_PERCENT: u64 = 100;

/// Fixed-point scale of the reflection accumulator (1e12).
pub const ACCUMULATOR_SCALE: u128 = 1_000_000_000_000;

#[constant]
pub const GLOBAL_LEDGER_SEED: &[u8] = b"global-ledger";

#[constant]
pub const PARTICIPANT_SEED: &[u8] = b"participant";

#[constant]
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault-authority";

#[constant]
pub const TREASURY_SEED: &[u8] = b"treasury";
