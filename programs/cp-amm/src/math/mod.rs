// Pricing and accounting engine
//
// Pure functions only: no accounts, no CPI, no logging. Each entry point
// returns a quote or the first violated condition.

pub mod liquidity;
pub mod safe;
pub mod swap;

pub use liquidity::*;
pub use swap::*;
