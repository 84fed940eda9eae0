// Unlock Pool Instruction
//
// Re-enables pool operations. Only the pool authority can unlock.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct UnlockPool<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED, config.seed.to_le_bytes().as_ref()],
        bump = config.config_bump,
    )]
    pub config: Account<'info, PoolConfig>,
}

impl<'info> UnlockPool<'info> {
    pub fn unlock_pool(&mut self) -> Result<()> {
        self.config.assert_is_authority(&self.authority.key())?;
        self.config.unlock()?;

        msg!("Pool {} unlocked by {}", self.config.seed, self.authority.key());

        Ok(())
    }
}
