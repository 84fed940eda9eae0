use anchor_lang::prelude::*;

#[error_code]
pub enum AmmError {
    #[msg("Fee basis points cannot exceed 10000 (100%)")]
    InvalidFee,

    #[msg("Token mints must be different - cannot create pool with same token")]
    IdenticalMints,

    #[msg("Amount cannot be zero")]
    ZeroLiquidity,

    #[msg("Insufficient liquidity for this operation")]
    InsufficientLiquidity,

    #[msg("Computed amount is outside the caller's slippage bound")]
    SlippageExceeded,

    #[msg("Pool is currently locked - operations are disabled")]
    PoolLocked,

    #[msg("Pool is already locked")]
    PoolAlreadyLocked,

    #[msg("Pool is already unlocked")]
    PoolAlreadyUnlocked,

    #[msg("Arithmetic overflow occurred")]
    Overflow,

    #[msg("Arithmetic underflow occurred")]
    Underflow,

    #[msg("Division by zero attempted")]
    DivideByZero,

    #[msg("Only the pool authority can perform this action")]
    Unauthorized,
}
