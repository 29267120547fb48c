#![allow(deprecated)]

use anchor_lang::prelude::*;
mod constants;
mod contexts;
use contexts::*;
mod states;

pub use constants::*;
pub use states::Escrow;

declare_id!("AhLKFY8RfnswVynwvZx7wjWCuvRm5wYzBYbRW8BG6GPd");

#[program]
pub mod escrow_program {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        seed: u64,
        initializer_amount: u64,
        taker_amount: u64,
    ) -> Result<()> {
        ctx.accounts
            .initialize_escrow(seed, &ctx.bumps, initializer_amount, taker_amount)?;
        ctx.accounts.deposit(initializer_amount)
    }

    pub fn cancel(ctx: Context<Cancel>) -> Result<()> {
        ctx.accounts.refund_and_close_vault()
    }

    pub fn exchange(ctx: Context<Exchange>) -> Result<()> {
        ctx.accounts.deposit()?;
        ctx.accounts.withdraw_and_close_vault()
    }
}

#[error_code]
pub enum EscrowError {
    #[msg("Offered and requested amounts must both be greater than zero")]
    InvalidAmount,
    #[msg("Offered and requested mints must differ")]
    IdenticalMints,
    #[msg("Token account balance is below the amount required")]
    InsufficientFunds,
    #[msg("Supplied account does not match the escrow record")]
    AccountMismatch,
    #[msg("Only the initializer may cancel this escrow")]
    Unauthorized,
    #[msg("Vault balance does not match the escrowed amount")]
    VaultBalanceMismatch,
}
