pub mod reflection;
pub mod vesting;
pub mod yield_accrual;

pub use reflection::*;
pub use vesting::*;
pub use yield_accrual::*;
