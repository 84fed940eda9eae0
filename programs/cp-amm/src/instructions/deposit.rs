// Deposit Instruction
//
// Adds liquidity and mints LP tokens.
// First deposit: max_a / max_b are taken whole, LP = sqrt(a * b).
// Later deposits: the caller names the LP amount; the required token
// amounts are rounded up and bounded by max_a / max_b.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, helpers::*, math::deposit_quote, state::*};

#[derive(Accounts)]
pub struct Deposit<'info> {
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
        mint::authority = config,
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
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = user,
    )]
    pub user_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = mint_b,
        associated_token::authority = user,
    )]
    pub user_b: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = mint_lp,
        associated_token::authority = user,
    )]
    pub user_lp: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    pub fn deposit(&mut self, amount: u64, max_a: u64, max_b: u64) -> Result<()> {
        self.config.assert_not_locked()?;

        let reserves = self.reserves();
        let quote = deposit_quote(&reserves, amount, max_a, max_b)?;
        let after = reserves.apply_deposit(&quote)?;
        after.assert_consistent()?;

        self.deposit_token(true, quote.amount_a)?;
        self.deposit_token(false, quote.amount_b)?;
        self.mint_lp(quote.shares)?;

        msg!(
            "Deposited: {} A, {} B -> {} LP",
            quote.amount_a,
            quote.amount_b,
            quote.shares
        );
        msg!(
            "Reserves: {} A, {} B, LP supply {}",
            after.reserve_a,
            after.reserve_b,
            after.share_supply
        );

        Ok(())
    }

    fn reserves(&self) -> PoolReserves {
        PoolReserves::new(
            self.vault_a.amount,
            self.vault_b.amount,
            self.mint_lp.supply,
        )
    }

    fn deposit_token(&self, is_a: bool, amount: u64) -> Result<()> {
        let (from, to) = if is_a {
            (self.user_a.to_account_info(), self.vault_a.to_account_info())
        } else {
            (self.user_b.to_account_info(), self.vault_b.to_account_info())
        };

        transfer_to_vault(
            amount,
            &self.token_program.to_account_info(),
            &from,
            &to,
            &self.user.to_account_info(),
        )
    }

    fn mint_lp(&self, amount: u64) -> Result<()> {
        let seed_bytes = self.config.seed.to_le_bytes();
        let bump = [self.config.config_bump];
        let seeds = config_seeds(&seed_bytes, &bump);

        mint_lp_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.mint_lp.to_account_info(),
            &self.user_lp.to_account_info(),
            &self.config.to_account_info(),
            &seeds,
        )
    }
}
