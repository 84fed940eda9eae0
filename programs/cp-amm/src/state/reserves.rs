// Pool Reserves Snapshot
//
// The vault balances and LP supply are the pool's reserves; nothing here is
// persisted. Handlers build a snapshot from the loaded accounts, price the
// request against it, and check the resulting snapshot before any CPI.

use crate::{
    errors::AmmError,
    math::{
        liquidity::{DepositQuote, WithdrawQuote},
        safe::SafeMath,
        swap::{SwapDirection, SwapQuote},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolReserves {
    pub reserve_a: u64,
    pub reserve_b: u64,
    pub share_supply: u64,
}

impl PoolReserves {
    pub fn new(reserve_a: u64, reserve_b: u64, share_supply: u64) -> Self {
        Self {
            reserve_a,
            reserve_b,
            share_supply,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.share_supply == 0
    }

    /// `reserve_a * reserve_b`; cannot overflow u128.
    pub fn product(&self) -> u128 {
        (self.reserve_a as u128) * (self.reserve_b as u128)
    }

    /// Either fully empty or fully funded.
    pub fn is_consistent(&self) -> bool {
        let a = self.reserve_a == 0;
        let b = self.reserve_b == 0;
        let s = self.share_supply == 0;
        a == b && b == s
    }

    pub fn assert_consistent(&self) -> Result<(), AmmError> {
        if !self.is_consistent() {
            return Err(AmmError::InsufficientLiquidity);
        }
        Ok(())
    }

    /// Returns `(input_reserve, output_reserve)` for a swap direction.
    pub fn input_output(&self, direction: SwapDirection) -> (u64, u64) {
        match direction {
            SwapDirection::AToB => (self.reserve_a, self.reserve_b),
            SwapDirection::BToA => (self.reserve_b, self.reserve_a),
        }
    }

    pub fn apply_deposit(&self, quote: &DepositQuote) -> Result<Self, AmmError> {
        Ok(Self {
            reserve_a: self.reserve_a.safe_add(quote.amount_a)?,
            reserve_b: self.reserve_b.safe_add(quote.amount_b)?,
            share_supply: self.share_supply.safe_add(quote.shares)?,
        })
    }

    pub fn apply_withdraw(&self, quote: &WithdrawQuote) -> Result<Self, AmmError> {
        Ok(Self {
            reserve_a: self.reserve_a.safe_sub(quote.amount_a)?,
            reserve_b: self.reserve_b.safe_sub(quote.amount_b)?,
            share_supply: self.share_supply.safe_sub(quote.shares)?,
        })
    }

    /// The full input, fee included, stays in the pool.
    pub fn apply_swap(&self, quote: &SwapQuote) -> Result<Self, AmmError> {
        let mut next = *self;
        let (input, output) = match quote.direction {
            SwapDirection::AToB => (&mut next.reserve_a, &mut next.reserve_b),
            SwapDirection::BToA => (&mut next.reserve_b, &mut next.reserve_a),
        };
        *input = input.safe_add(quote.amount_in)?;
        *output = output.safe_sub(quote.amount_out)?;
        Ok(next)
    }
}
