pub mod admin_grant;
pub mod admin_withdraw;
pub mod claim_reflections;
pub mod claim_yield;
pub mod deposit;
pub mod deposit_value;
pub mod initialize;
pub mod register;
pub mod withdraw;

pub use admin_grant::*;
pub use admin_withdraw::*;
pub use claim_reflections::*;
pub use claim_yield::*;
pub use deposit::*;
pub use deposit_value::*;
pub use initialize::*;
pub use register::*;
pub use withdraw::*;
