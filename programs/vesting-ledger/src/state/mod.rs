pub mod global_ledger;
pub mod participant;

pub use global_ledger::*;
pub use participant::*;
