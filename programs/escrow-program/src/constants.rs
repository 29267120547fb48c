/// Domain tag for the escrow record PDA; the full seed list is `[ESCROW_SEED, seed.to_le_bytes()]`.
pub const ESCROW_SEED: &[u8] = b"state";
