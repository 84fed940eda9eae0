// Instructions Module

pub mod initialize;
pub mod deposit;
pub mod withdraw;
pub mod swap;
pub mod lock_pool;
pub mod unlock_pool;

pub use initialize::*;
pub use deposit::*;
pub use withdraw::*;
pub use swap::*;
pub use lock_pool::*;
pub use unlock_pool::*;
