// Swap Math
//
// Constant product (x * y = k) with the fee taken from the input:
//   in_after_fee = floor(amount_in * (10000 - fee_bps) / 10000)
//   amount_out   = floor(R_out * in_after_fee / (R_in + in_after_fee))
// The whole amount_in is added to the input reserve, so the fee accrues to
// liquidity providers and k never decreases.

use crate::{
    constants::{BPS_DENOMINATOR, MAX_FEE_BPS},
    errors::AmmError,
    math::safe::{mul_div_floor, to_u64, SafeMath},
    state::PoolReserves,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    AToB,
    BToA,
}

impl From<bool> for SwapDirection {
    /// `true` swaps A for B.
    fn from(is_a: bool) -> Self {
        if is_a {
            SwapDirection::AToB
        } else {
            SwapDirection::BToA
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapQuote {
    pub direction: SwapDirection,
    pub amount_in: u64,
    pub amount_in_after_fee: u64,
    pub amount_out: u64,
}

pub fn amount_after_fee(amount_in: u64, fee_bps: u16) -> Result<u64, AmmError> {
    if fee_bps > MAX_FEE_BPS {
        return Err(AmmError::InvalidFee);
    }
    let keep_bps = BPS_DENOMINATOR.safe_sub(fee_bps as u64)?;
    mul_div_floor(amount_in, keep_bps, BPS_DENOMINATOR)
}

pub fn swap_quote(
    reserves: &PoolReserves,
    fee_bps: u16,
    direction: SwapDirection,
    amount_in: u64,
    min_out: u64,
) -> Result<SwapQuote, AmmError> {
    if amount_in == 0 {
        return Err(AmmError::ZeroLiquidity);
    }

    let (reserve_in, reserve_out) = reserves.input_output(direction);
    if reserve_in == 0 || reserve_out == 0 {
        return Err(AmmError::InsufficientLiquidity);
    }

    let amount_in_after_fee = amount_after_fee(amount_in, fee_bps)?;

    // Denominator may exceed u64 even though the quotient cannot.
    let numerator = (reserve_out as u128).safe_mul(amount_in_after_fee as u128)?;
    let denominator = (reserve_in as u128).safe_add(amount_in_after_fee as u128)?;
    let amount_out = to_u64(numerator.safe_div(denominator)?)?;

    if amount_out == 0 || amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    if amount_out < min_out {
        return Err(AmmError::SlippageExceeded);
    }

    Ok(SwapQuote {
        direction,
        amount_in,
        amount_in_after_fee,
        amount_out,
    })
}
