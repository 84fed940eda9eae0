// Pool Configuration State
//
// One PoolConfig exists per pool seed. The config PDA also owns both vaults
// and is the mint authority of the LP mint.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::AmmError};

#[account]
#[derive(InitSpace)]
pub struct PoolConfig {
    pub seed: u64,                    // Distinguishes pools over the same pair
    pub authority: Option<Pubkey>,    // Can lock/unlock pool; None = never
    pub mint_a: Pubkey,               // First token in pair
    pub mint_b: Pubkey,               // Second token in pair
    pub fee_bps: u16,                 // Swap fee (e.g., 30 = 0.30%)
    pub locked: bool,                 // Rejects deposit/withdraw/swap when set
    pub config_bump: u8,
    pub lp_bump: u8,
}

impl PoolConfig {
    pub fn validate_fee(fee_bps: u16) -> std::result::Result<(), AmmError> {
        if fee_bps > MAX_FEE_BPS {
            return Err(AmmError::InvalidFee);
        }
        Ok(())
    }

    pub fn lock(&mut self) -> std::result::Result<(), AmmError> {
        if self.locked {
            return Err(AmmError::PoolAlreadyLocked);
        }
        self.locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) -> std::result::Result<(), AmmError> {
        if !self.locked {
            return Err(AmmError::PoolAlreadyUnlocked);
        }
        self.locked = false;
        Ok(())
    }

    pub fn assert_not_locked(&self) -> std::result::Result<(), AmmError> {
        if self.locked {
            return Err(AmmError::PoolLocked);
        }
        Ok(())
    }

    pub fn assert_is_authority(&self, caller: &Pubkey) -> std::result::Result<(), AmmError> {
        match self.authority {
            Some(authority) if authority == *caller => Ok(()),
            _ => Err(AmmError::Unauthorized),
        }
    }
}
