use anchor_lang::prelude::*;

/// Custom error codes for the vesting pool program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Allocation sum would exceed 100% of the pool")]
    AllocationExceeded,

    #[msg("Vesting period has not ended for this recipient")]
    VestingNotEnded,

    #[msg("Vesting pool is paused")]
    VestingPaused,

    #[msg("Vesting pool is not paused")]
    VestingNotPaused,

    #[msg("Invalid input (zero amount, empty batch or zero allocation)")]
    InvalidInput,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Duplicate recipient wallet")]
    DuplicateRecipient,

    #[msg("Recipient list is full")]
    RecipientListFull,

    #[msg("Batch size too large")]
    BatchTooLarge,

    #[msg("Deposit would exceed the cumulative amount to vest")]
    OverDeposit,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid associated token account for recipient")]
    InvalidRecipientAta,

    #[msg("Math overflow")]
    MathOverflow,
}
