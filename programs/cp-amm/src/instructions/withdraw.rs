// Withdraw Instruction
//
// Burns LP tokens and pays out the proportional share of both vaults,
// rounded down.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, helpers::*, math::withdraw_quote, state::*};

#[derive(Accounts)]
pub struct Withdraw<'info> {
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
        mut,
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

    #[account(
        mut,
        associated_token::mint = mint_lp,
        associated_token::authority = user,
    )]
    pub user_lp: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Withdraw<'info> {
    pub fn withdraw(&mut self, amount: u64, min_a: u64, min_b: u64) -> Result<()> {
        self.config.assert_not_locked()?;

        let reserves = PoolReserves::new(
            self.vault_a.amount,
            self.vault_b.amount,
            self.mint_lp.supply,
        );
        let quote = withdraw_quote(&reserves, amount, self.user_lp.amount, min_a, min_b)?;
        let after = reserves.apply_withdraw(&quote)?;
        after.assert_consistent()?;

        self.burn_lp(quote.shares)?;
        self.withdraw_token(true, quote.amount_a)?;
        self.withdraw_token(false, quote.amount_b)?;

        msg!(
            "Withdrawn: {} LP -> {} A, {} B",
            quote.shares,
            quote.amount_a,
            quote.amount_b
        );
        msg!(
            "Reserves: {} A, {} B, LP supply {}",
            after.reserve_a,
            after.reserve_b,
            after.share_supply
        );

        Ok(())
    }

    fn burn_lp(&self, amount: u64) -> Result<()> {
        burn_lp_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.mint_lp.to_account_info(),
            &self.user_lp.to_account_info(),
            &self.user.to_account_info(),
        )
    }

    fn withdraw_token(&self, is_a: bool, amount: u64) -> Result<()> {
        // A rounded-down side can be zero when the other is not
        if amount == 0 {
            return Ok(());
        }

        let (from, to) = if is_a {
            (self.vault_a.to_account_info(), self.user_a.to_account_info())
        } else {
            (self.vault_b.to_account_info(), self.user_b.to_account_info())
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
