// Test utilities for the AMM program

#![allow(dead_code)]

use litesvm::LiteSVM;
use litesvm_token::{get_spl_account, CreateAssociatedTokenAccount, CreateMint, MintTo};
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use solana_system_interface::program::ID as system_program;
use spl_associated_token_account::get_associated_token_address;

// Program ID matching declare_id! (cp_amm)
pub const AMM_PROGRAM_ID: Pubkey = Pubkey::new_from_array(cp_amm::ID.to_bytes());

pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;

// PDA Seeds
pub const CONFIG_SEED: &[u8] = b"config";
pub const LP_MINT_SEED: &[u8] = b"lp";

pub const DECIMALS: u8 = 6;
pub const POOL_SEED: u64 = 1111;

// Build Anchor instruction discriminator
// Formula: first 8 bytes of sha256("global:method_name")
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash_result = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash_result.to_bytes()[..8]);
    discriminator
}

// Discriminator followed by borsh-encoded arguments
fn instruction_data<T: borsh::BorshSerialize>(method: &str, args: &T) -> Vec<u8> {
    let mut data = anchor_discriminator(method).to_vec();
    data.extend(borsh::to_vec(args).expect("args serialize"));
    data
}

// Custom error code Anchor reports for an AmmError variant
pub fn amm_error_code(error: cp_amm::errors::AmmError) -> u32 {
    anchor_lang::error::ERROR_CODE_OFFSET + error as u32
}

pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!("../../../../target/deploy/cp_amm.so");
    let _ = svm.add_program(AMM_PROGRAM_ID, program_bytes);
    svm
}

pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

pub fn send(svm: &mut LiteSVM, ix: Instruction, signer: &Keypair) -> Result<(), String> {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&signer.pubkey()),
        &[signer],
        svm.latest_blockhash(),
    );
    svm.send_transaction(tx)
        .map(|_| ())
        .map_err(|failed| format!("{:?}", failed.err))
}

pub fn assert_amm_error(result: Result<(), String>, error: cp_amm::errors::AmmError) {
    let code = amm_error_code(error);
    match result {
        Ok(()) => panic!("expected custom error {}, transaction succeeded", code),
        Err(err) => assert!(
            err.contains(&format!("Custom({})", code)),
            "expected custom error {}, got {}",
            code,
            err
        ),
    }
}

pub fn derive_config_pda(seed: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED, &seed.to_le_bytes()], &AMM_PROGRAM_ID)
}

pub fn derive_lp_mint_pda(config: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LP_MINT_SEED, config.as_ref()], &AMM_PROGRAM_ID)
}

pub fn token_balance(svm: &LiteSVM, account: &Pubkey) -> u64 {
    get_spl_account::<spl_token::state::Account>(svm, account)
        .map(|a| a.amount)
        .unwrap_or(0)
}

pub fn mint_supply(svm: &LiteSVM, mint: &Pubkey) -> u64 {
    get_spl_account::<spl_token::state::Mint>(svm, mint)
        .expect("mint should exist")
        .supply
}

// Addresses of one pool
pub struct PoolKeys {
    pub seed: u64,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub config: Pubkey,
    pub mint_lp: Pubkey,
    pub vault_a: Pubkey,
    pub vault_b: Pubkey,
}

impl PoolKeys {
    pub fn new(seed: u64, mint_a: Pubkey, mint_b: Pubkey) -> Self {
        let (config, _) = derive_config_pda(seed);
        let (mint_lp, _) = derive_lp_mint_pda(&config);
        Self {
            seed,
            mint_a,
            mint_b,
            config,
            mint_lp,
            vault_a: get_associated_token_address(&config, &mint_a),
            vault_b: get_associated_token_address(&config, &mint_b),
        }
    }

    pub fn reserves(&self, svm: &LiteSVM) -> (u64, u64, u64) {
        (
            token_balance(svm, &self.vault_a),
            token_balance(svm, &self.vault_b),
            mint_supply(svm, &self.mint_lp),
        )
    }

    pub fn user_balances(&self, svm: &LiteSVM, user: &Pubkey) -> (u64, u64, u64) {
        (
            token_balance(svm, &get_associated_token_address(user, &self.mint_a)),
            token_balance(svm, &get_associated_token_address(user, &self.mint_b)),
            token_balance(svm, &get_associated_token_address(user, &self.mint_lp)),
        )
    }
}

// Creates both mints and initializes a pool; `admin` is mint authority and
// pool authority.
pub fn create_pool(svm: &mut LiteSVM, admin: &Keypair, fee_bps: u16) -> PoolKeys {
    let mint_a = CreateMint::new(svm, admin)
        .authority(&admin.pubkey())
        .decimals(DECIMALS)
        .send()
        .expect("Failed to create mint A");

    let mint_b = CreateMint::new(svm, admin)
        .authority(&admin.pubkey())
        .decimals(DECIMALS)
        .send()
        .expect("Failed to create mint B");

    let pool = PoolKeys::new(POOL_SEED, mint_a, mint_b);
    let ix = build_initialize_ix(&admin.pubkey(), &pool, fee_bps, Some(admin.pubkey()));
    send(svm, ix, admin).expect("Pool initialization failed");
    pool
}

// Gives `user` token accounts for both sides holding the given amounts
pub fn fund_user(
    svm: &mut LiteSVM,
    admin: &Keypair,
    pool: &PoolKeys,
    user: &Keypair,
    amount_a: u64,
    amount_b: u64,
) {
    for (mint, amount) in [(pool.mint_a, amount_a), (pool.mint_b, amount_b)] {
        let ata = CreateAssociatedTokenAccount::new(svm, user, &mint)
            .owner(&user.pubkey())
            .send()
            .expect("Failed to create ATA");

        if amount > 0 {
            MintTo::new(svm, admin, &mint, &ata, amount)
                .owner(admin)
                .send()
                .expect("Failed to mint");
        }
    }
}

pub fn build_initialize_ix(
    initializer: &Pubkey,
    pool: &PoolKeys,
    fee_bps: u16,
    authority: Option<Pubkey>,
) -> Instruction {
    let args = (pool.seed, fee_bps, authority.map(|a| a.to_bytes()));

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*initializer, true),
            AccountMeta::new_readonly(pool.mint_a, false),
            AccountMeta::new_readonly(pool.mint_b, false),
            AccountMeta::new(pool.config, false),
            AccountMeta::new(pool.mint_lp, false),
            AccountMeta::new(pool.vault_a, false),
            AccountMeta::new(pool.vault_b, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: instruction_data("initialize", &args),
    }
}

// Deposit and withdraw share one account layout
fn liquidity_accounts(user: &Pubkey, pool: &PoolKeys) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new(*user, true),
        AccountMeta::new_readonly(pool.mint_a, false),
        AccountMeta::new_readonly(pool.mint_b, false),
        AccountMeta::new_readonly(pool.config, false),
        AccountMeta::new(pool.mint_lp, false),
        AccountMeta::new(pool.vault_a, false),
        AccountMeta::new(pool.vault_b, false),
        AccountMeta::new(get_associated_token_address(user, &pool.mint_a), false),
        AccountMeta::new(get_associated_token_address(user, &pool.mint_b), false),
        AccountMeta::new(get_associated_token_address(user, &pool.mint_lp), false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(system_program, false),
    ]
}

pub fn build_deposit_ix(
    user: &Pubkey,
    pool: &PoolKeys,
    amount: u64,
    max_a: u64,
    max_b: u64,
) -> Instruction {
    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: liquidity_accounts(user, pool),
        data: instruction_data("deposit", &(amount, max_a, max_b)),
    }
}

pub fn build_withdraw_ix(
    user: &Pubkey,
    pool: &PoolKeys,
    amount: u64,
    min_a: u64,
    min_b: u64,
) -> Instruction {
    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: liquidity_accounts(user, pool),
        data: instruction_data("withdraw", &(amount, min_a, min_b)),
    }
}

pub fn build_swap_ix(
    user: &Pubkey,
    pool: &PoolKeys,
    is_a: bool,
    amount_in: u64,
    min_out: u64,
) -> Instruction {
    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(pool.mint_a, false),
            AccountMeta::new_readonly(pool.mint_b, false),
            AccountMeta::new_readonly(pool.config, false),
            AccountMeta::new_readonly(pool.mint_lp, false),
            AccountMeta::new(pool.vault_a, false),
            AccountMeta::new(pool.vault_b, false),
            AccountMeta::new(get_associated_token_address(user, &pool.mint_a), false),
            AccountMeta::new(get_associated_token_address(user, &pool.mint_b), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: instruction_data("swap", &(is_a, amount_in, min_out)),
    }
}

fn build_toggle_ix(method: &str, authority: &Pubkey, pool: &PoolKeys) -> Instruction {
    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(pool.config, false),
        ],
        data: anchor_discriminator(method).to_vec(),
    }
}

pub fn build_lock_ix(authority: &Pubkey, pool: &PoolKeys) -> Instruction {
    build_toggle_ix("lock", authority, pool)
}

pub fn build_unlock_ix(authority: &Pubkey, pool: &PoolKeys) -> Instruction {
    build_toggle_ix("unlock", authority, pool)
}
