// Liquidity Math
//
// First deposit: the depositor's amounts become the reserves and set the
// price; LP = floor(sqrt(a * b)).
// Later deposits: amounts required for L shares are rounded up.
// Withdrawals: amounts paid for L shares are rounded down.
// Both roundings favour the pool.

use crate::{
    errors::AmmError,
    math::safe::{isqrt, mul_div_ceil, mul_div_floor, to_u64, SafeMath},
    state::PoolReserves,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositQuote {
    pub amount_a: u64,
    pub amount_b: u64,
    pub shares: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawQuote {
    pub amount_a: u64,
    pub amount_b: u64,
    pub shares: u64,
}

/// Price a deposit against the current reserves.
///
/// On an empty pool `share_amount` is ignored: `max_a` and `max_b` are taken
/// whole and the minted amount is their floored geometric mean.
pub fn deposit_quote(
    reserves: &PoolReserves,
    share_amount: u64,
    max_a: u64,
    max_b: u64,
) -> Result<DepositQuote, AmmError> {
    if reserves.is_empty() {
        return bootstrap_quote(max_a, max_b);
    }

    if share_amount == 0 {
        return Err(AmmError::ZeroLiquidity);
    }

    let amount_a = mul_div_ceil(share_amount, reserves.reserve_a, reserves.share_supply)?;
    let amount_b = mul_div_ceil(share_amount, reserves.reserve_b, reserves.share_supply)?;

    if amount_a > max_a || amount_b > max_b {
        return Err(AmmError::SlippageExceeded);
    }

    Ok(DepositQuote {
        amount_a,
        amount_b,
        shares: share_amount,
    })
}

/// Shares minted for the first deposit into an empty pool.
pub fn bootstrap_quote(amount_a: u64, amount_b: u64) -> Result<DepositQuote, AmmError> {
    if amount_a == 0 || amount_b == 0 {
        return Err(AmmError::ZeroLiquidity);
    }

    let product = (amount_a as u128).safe_mul(amount_b as u128)?;
    let shares = to_u64(isqrt(product))?;

    Ok(DepositQuote {
        amount_a,
        amount_b,
        shares,
    })
}

/// Price a withdrawal of `share_amount` LP tokens held in a balance of
/// `share_balance`.
pub fn withdraw_quote(
    reserves: &PoolReserves,
    share_amount: u64,
    share_balance: u64,
    min_a: u64,
    min_b: u64,
) -> Result<WithdrawQuote, AmmError> {
    if share_amount == 0
        || share_amount > share_balance
        || share_amount > reserves.share_supply
    {
        return Err(AmmError::InsufficientLiquidity);
    }

    let amount_a = mul_div_floor(share_amount, reserves.reserve_a, reserves.share_supply)?;
    let amount_b = mul_div_floor(share_amount, reserves.reserve_b, reserves.share_supply)?;

    // Burning shares for nothing is never what the caller meant.
    if amount_a == 0 && amount_b == 0 {
        return Err(AmmError::InsufficientLiquidity);
    }

    if amount_a < min_a || amount_b < min_b {
        return Err(AmmError::SlippageExceeded);
    }

    Ok(WithdrawQuote {
        amount_a,
        amount_b,
        shares: share_amount,
    })
}
