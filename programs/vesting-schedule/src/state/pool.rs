use anchor_lang::prelude::*;

/// Single vesting pool state PDA.
#[account]
pub struct VestingPool {
    /// Token mint.
    pub mint: Pubkey,
    /// Admin authority (multisig recommended off-chain).
    pub admin: Pubkey,
    /// Pool-global reference start (Unix seconds, UTC). A recipient's
    /// effective unlock is max(start_date, recipient.unlock_ts).
    pub start_date: i64,
    /// Emergency pause flag (blocks claims; registration continues).
    pub paused: bool,
    /// Total token amount backing all allocations.
    pub cumulative_amount_to_vest: u64,
    /// Running sum of scaled allocation percentages (<= PERCENTAGE_SCALE).
    pub total_allocated_percentage: u64,
    /// Total disbursed supply (sum of per-recipient claimed_amount).
    pub claimed_supply: u64,
    /// Recipient count (<= MAX_RECIPIENTS).
    pub recipient_count: u8,
}

impl VestingPool {
    pub const SIZE: usize =
        32 + // mint
        32 + // admin
        8 +  // start_date
        1 +  // paused
        8 +  // cumulative_amount_to_vest
        8 +  // total_allocated_percentage
        8 +  // claimed_supply
        1;   // recipient_count
}
