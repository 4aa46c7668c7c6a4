//! Program-wide constants.

/// Scaled-percentage denominator: allocations are expressed in units of
/// 1/100_000 of the pool, so 100_000 == 100% and 10_000 == 10%.
pub const PERCENTAGE_SCALE: u64 = 100_000;

/// Max recipients stored on-chain in the recipients list PDA.
pub const MAX_RECIPIENTS: usize = 35;

/// Max recipients accepted per `add_multiple_recipients` call.
pub const MAX_BATCH_ADD: usize = 10;
