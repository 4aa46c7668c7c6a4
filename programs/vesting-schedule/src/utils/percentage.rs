//! Scaled-percentage share arithmetic.
//!
//! Allocations are fixed-point percentages with denominator
//! `PERCENTAGE_SCALE` (100_000 == 100%). Products are widened to u128 so
//! `total * allocation` cannot overflow; division truncates toward zero.

use crate::constants::PERCENTAGE_SCALE;
use crate::error::VestingError;

/// Share of `total` owed to an `allocation` expressed in scale units.
pub fn compute_share(allocation: u64, total: u64) -> Result<u64, VestingError> {
    let raw = (total as u128)
        .checked_mul(allocation as u128)
        .ok_or(VestingError::MathOverflow)?
        / (PERCENTAGE_SCALE as u128);
    u64::try_from(raw).map_err(|_| VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_percent_of_a_million() {
        assert_eq!(compute_share(10_000, 1_000_000).unwrap(), 100_000);
        assert_eq!(compute_share(80_000, 1_000_000).unwrap(), 800_000);
    }

    #[test]
    fn full_scale_is_identity() {
        assert_eq!(compute_share(PERCENTAGE_SCALE, 1_000_000).unwrap(), 1_000_000);
        assert_eq!(compute_share(PERCENTAGE_SCALE, u64::MAX).unwrap(), u64::MAX);
    }

    #[test]
    fn zero_allocation_is_zero() {
        assert_eq!(compute_share(0, u64::MAX).unwrap(), 0);
    }

    #[test]
    fn sub_unit_share_truncates_to_zero() {
        // 1/100_000 of 99_999 tokens rounds down to nothing.
        assert_eq!(compute_share(1, 99_999).unwrap(), 0);
        assert_eq!(compute_share(1, 100_000).unwrap(), 1);
    }

    #[test]
    fn partial_shares_never_exceed_total() {
        let total = 1_000_003;
        let shares = [33_333u64, 33_333, 33_334];
        let sum: u64 = shares
            .iter()
            .map(|a| compute_share(*a, total).unwrap())
            .sum();
        assert!(sum <= total);
    }
}
