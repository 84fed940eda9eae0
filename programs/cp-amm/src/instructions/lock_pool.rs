// Lock Pool Instruction
//
// Pauses deposits, withdrawals and swaps. Only the pool authority can lock.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct LockPool<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED, config.seed.to_le_bytes().as_ref()],
        bump = config.config_bump,
    )]
    pub config: Account<'info, PoolConfig>,
}

impl<'info> LockPool<'info> {
    pub fn lock_pool(&mut self) -> Result<()> {
        self.config.assert_is_authority(&self.authority.key())?;
        self.config.lock()?;

        msg!("Pool {} locked by {}", self.config.seed, self.authority.key());

        Ok(())
    }
}
