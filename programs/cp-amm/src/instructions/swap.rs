// Swap Instruction
//
// Swaps one side of the pair for the other along x * y = k. The fee is
// deducted from the input before pricing but the full input is deposited.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{
    constants::*,
    helpers::*,
    math::{swap_quote, SwapDirection},
    state::*,
};

#[derive(Accounts)]
pub struct Swap<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    pub mint_a: Box<Account<'info, Mint>>,
    pub mint_b: Box<Account<'info, Mint>>,

    #[account(
        has_one = mint_a,
        has_one = mint_b,
        seeds = [CONFIG_SEED, config.seed.to_le_bytes().as_ref()],
        bump = config.config_bump,
    )]
    pub config: Box<Account<'info, PoolConfig>>,

    #[account(
        seeds = [LP_MINT_SEED, config.key().as_ref()],
        bump = config.lp_bump,
    )]
    pub mint_lp: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = config,
    )]
    pub vault_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = mint_b,
        associated_token::authority = config,
    )]
    pub vault_b: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = mint_a,
        associated_token::authority = user,
    )]
    pub user_a: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = mint_b,
        associated_token::authority = user,
    )]
    pub user_b: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Swap<'info> {
    pub fn swap(&mut self, is_a: bool, amount_in: u64, min_out: u64) -> Result<()> {
        self.config.assert_not_locked()?;

        let reserves = PoolReserves::new(
            self.vault_a.amount,
            self.vault_b.amount,
            self.mint_lp.supply,
        );
        let direction = SwapDirection::from(is_a);
        let quote = swap_quote(&reserves, self.config.fee_bps, direction, amount_in, min_out)?;
        let after = reserves.apply_swap(&quote)?;
        after.assert_consistent()?;

        self.deposit_token(direction, quote.amount_in)?;
        self.withdraw_token(direction, quote.amount_out)?;

        match direction {
            SwapDirection::AToB => {
                msg!("Swapped {} A -> {} B", quote.amount_in, quote.amount_out)
            }
            SwapDirection::BToA => {
                msg!("Swapped {} B -> {} A", quote.amount_in, quote.amount_out)
            }
        }
        msg!("Reserves: {} A, {} B", after.reserve_a, after.reserve_b);

        Ok(())
    }

    fn deposit_token(&self, direction: SwapDirection, amount: u64) -> Result<()> {
        let (from, to) = match direction {
            SwapDirection::AToB => (self.user_a.to_account_info(), self.vault_a.to_account_info()),
            SwapDirection::BToA => (self.user_b.to_account_info(), self.vault_b.to_account_info()),
        };

        transfer_to_vault(
            amount,
            &self.token_program.to_account_info(),
            &from,
            &to,
            &self.user.to_account_info(),
        )
    }

    fn withdraw_token(&self, direction: SwapDirection, amount: u64) -> Result<()> {
        let (from, to) = match direction {
            SwapDirection::AToB => (self.vault_b.to_account_info(), self.user_b.to_account_info()),
            SwapDirection::BToA => (self.vault_a.to_account_info(), self.user_a.to_account_info()),
        };

        let seed_bytes = self.config.seed.to_le_bytes();
        let bump = [self.config.config_bump];
        let seeds = config_seeds(&seed_bytes, &bump);

        transfer_from_vault(
            amount,
            &self.token_program.to_account_info(),
            &from,
            &to,
            &self.config.to_account_info(),
            &seeds,
        )
    }
}
