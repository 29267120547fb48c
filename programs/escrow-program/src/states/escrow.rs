use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::{EscrowError, ESCROW_SEED};

/// Terms of one open trade. Lives at `[ESCROW_SEED, seed]` and owns the vault.
#[account]
#[derive(InitSpace, Debug)]
pub struct Escrow {
    pub seed: u64,
    pub initializer: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub initializer_amount: u64,
    pub taker_amount: u64,
    pub bump: u8,
}

impl Escrow {
    /// Escrow PDA and bump for `seed`.
    pub fn find_address(seed: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[ESCROW_SEED, seed.to_le_bytes().as_ref()], &crate::ID)
    }

    /// Vault holding `mint_a` on behalf of `escrow`. The escrow is off-curve.
    pub fn vault_address(escrow: &Pubkey, mint_a: &Pubkey) -> Pubkey {
        get_associated_token_address(escrow, mint_a)
    }

    pub fn validate_terms(initializer_amount: u64, taker_amount: u64) -> Result<()> {
        require_gt!(initializer_amount, 0, EscrowError::InvalidAmount);
        require_gt!(taker_amount, 0, EscrowError::InvalidAmount);
        Ok(())
    }

    /// The vault must hold exactly what was deposited at initialize.
    pub fn is_fully_funded(&self, vault_amount: u64) -> bool {
        vault_amount == self.initializer_amount
    }
}
