//! Ledger state transitions.
//!
//! Every operation stages its changes on copies of the accounts, runs its
//! balance gates and transfers through a [`TransferGateway`], and writes the
//! staged state back only once every transfer has succeeded. A failing gate
//! or transfer leaves the ledger exactly as it was.

use anchor_lang::prelude::*;

pub mod global;
pub mod participant;


pub use global::*;
pub use participant::*;

/// Holding areas value can move between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Custody {
    /// The caller's own balance (participant or admin)
    External,
    /// Vault holding staked principal
    PrincipalVault,
    /// Vault yield is paid from
    RewardVault,
    /// Treasury reflections are paid from
    Treasury,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: Custody,
    pub to: Custody,
    pub amount: u64,
}

impl Transfer {
    pub fn new(from: Custody, to: Custody, amount: u64) -> Self {
        Self { from, to, amount }
    }
}

/// Moves value between custody areas on behalf of the ledger.
pub trait TransferGateway {
    /// Balance of `custody` that can be paid out right now.
    fn available(&self, custody: Custody) -> Result<u64>;

    fn transfer(&mut self, transfer: Transfer) -> Result<()>;
}
