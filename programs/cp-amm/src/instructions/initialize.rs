// Initialize Instruction
//
// Creates the pool config, the LP mint and both vaults for a token pair.
// No liquidity is taken here; the first deposit sets the price.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub initializer: Signer<'info>,

    pub mint_a: Box<Account<'info, Mint>>,
    pub mint_b: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = initializer,
        space = ANCHOR_DISCRIMINATOR + PoolConfig::INIT_SPACE,
        seeds = [CONFIG_SEED, seed.to_le_bytes().as_ref()],
        bump,
        constraint = mint_a.key() != mint_b.key() @ AmmError::IdenticalMints,
    )]
    pub config: Box<Account<'info, PoolConfig>>,

    #[account(
        init,
        payer = initializer,
        seeds = [LP_MINT_SEED, config.key().as_ref()],
        bump,
        mint::decimals = LP_DECIMALS,
        mint::authority = config,
    )]
    pub mint_lp: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = initializer,
        associated_token::mint = mint_a,
        associated_token::authority = config,
    )]
    pub vault_a: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = initializer,
        associated_token::mint = mint_b,
        associated_token::authority = config,
    )]
    pub vault_b: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(
        &mut self,
        seed: u64,
        fee_bps: u16,
        authority: Option<Pubkey>,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        PoolConfig::validate_fee(fee_bps)?;

        self.config.set_inner(PoolConfig {
            seed,
            authority,
            mint_a: self.mint_a.key(),
            mint_b: self.mint_b.key(),
            fee_bps,
            locked: false,
            config_bump: bumps.config,
            lp_bump: bumps.mint_lp,
        });

        msg!(
            "Pool {} initialized: {} / {}",
            seed,
            self.mint_a.key(),
            self.mint_b.key()
        );
        msg!("Fee: {} basis points", fee_bps);

        Ok(())
    }
}
