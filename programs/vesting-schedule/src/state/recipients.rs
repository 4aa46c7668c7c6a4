use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

/// A single recipient entry stored in the recipients list PDA.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable,
)]
#[repr(C)]
pub struct RecipientEntry {
    pub wallet: Pubkey,
    /// Scaled percentage share of the pool (PERCENTAGE_SCALE == 100%).
    pub allocation: u64,
    /// Unix timestamp at or after which the share may be claimed.
    pub unlock_ts: i64,
    /// Amount disbursed so far (0 or the full share; claims are all-at-once).
    pub claimed_amount: u64,
    /// Terminal claim flag.
    pub claimed: u8,
    pub _padding: [u8; 7],
}

impl Default for RecipientEntry {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl RecipientEntry {
    pub const SIZE: usize = core::mem::size_of::<RecipientEntry>();
}

/// PDA holding the full recipients list; first `recipient_count` entries
/// are in use, in deterministic insertion order.
#[account]
#[repr(C)]
pub struct Recipients {
    pub entries: [RecipientEntry; crate::constants::MAX_RECIPIENTS],
}

impl Recipients {
    /// Space for discriminator + fixed entries array (no vec header).
    pub const fn space() -> usize {
        8 + core::mem::size_of::<Recipients>()
    }
}

/// Instruction input for registration.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecipientInput {
    pub wallet: Pubkey,
    pub allocation: u64,
    pub unlock_ts: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_RECIPIENTS;

    #[test]
    fn entry_layout_is_stable() {
        // repr(C) with explicit padding: the borsh wire size must equal the
        // in-memory size, or Recipients::space() under-allocates.
        assert_eq!(RecipientEntry::SIZE, 64);
        assert_eq!(
            core::mem::size_of::<Recipients>(),
            RecipientEntry::SIZE * MAX_RECIPIENTS
        );
        assert_eq!(Recipients::space(), 8 + 64 * MAX_RECIPIENTS);
    }

    #[test]
    fn zeroed_entry_is_vacant() {
        let e = RecipientEntry::zeroed();
        assert_eq!(e.wallet, Pubkey::default());
        assert_eq!(e.allocation, 0);
        assert_eq!(e.claimed, 0);
    }
}
