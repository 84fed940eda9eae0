// Constant Product AMM Program
//
// Two-token pool priced along x * y = k, with proportional LP shares.
//
// Instructions:
// - initialize: Create pool config, LP mint and vaults for a token pair
// - deposit: Add tokens, receive LP tokens
// - withdraw: Burn LP tokens, receive tokens
// - swap: Exchange one token for the other, fee retained by the pool
// - lock / unlock: Authority-only pause switch
//
// Pricing and share accounting live in `math`; handlers only read balances,
// ask `math` for a quote, and move tokens once the quote is valid.

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod helpers;
pub mod instructions;
pub mod math;
pub mod state;

pub use instructions::*;

declare_id!("8LYdbR8mX7vwVcdWsCSeswzksnesftdXQEsUn39R1sdu");

#[program]
pub mod cp_amm {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        seed: u64,
        fee: u16,
        authority: Option<Pubkey>,
    ) -> Result<()> {
        ctx.accounts.initialize(seed, fee, authority, &ctx.bumps)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64, max_a: u64, max_b: u64) -> Result<()> {
        ctx.accounts.deposit(amount, max_a, max_b)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64, min_a: u64, min_b: u64) -> Result<()> {
        ctx.accounts.withdraw(amount, min_a, min_b)
    }

    pub fn swap(ctx: Context<Swap>, is_a: bool, amount_in: u64, min_out: u64) -> Result<()> {
        ctx.accounts.swap(is_a, amount_in, min_out)
    }

    pub fn lock(ctx: Context<LockPool>) -> Result<()> {
        ctx.accounts.lock_pool()
    }

    pub fn unlock(ctx: Context<UnlockPool>) -> Result<()> {
        ctx.accounts.unlock_pool()
    }
}
