use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::instructions::claim::effective_unlock;
use crate::state::{RecipientEntry, Recipients, VestingPool};
use crate::utils::percentage;

/// Read-only quote of what the caller could claim right now. On-chain
/// programs surface view results through logs, so the amount is emitted as
/// an event; no state is mutated.
pub fn has_claim(ctx: Context<HasClaim>) -> Result<()> {
    let pool = &ctx.accounts.pool;
    let claimant = ctx.accounts.claimant.key();
    let now = Clock::get()?.unix_timestamp;

    let entry = ctx
        .accounts
        .recipients
        .entries
        .iter()
        .take(pool.recipient_count as usize)
        .find(|e| e.wallet == claimant);

    let amount = claimable_quote(entry, pool, now)?;

    emit!(ClaimableQuote {
        recipient: claimant,
        amount,
    });

    Ok(())
}

/// Zero while locked, already claimed, or unregistered; the computed share
/// otherwise. Pausing blocks claim execution, not this quote.
pub(crate) fn claimable_quote(
    entry: Option<&RecipientEntry>,
    pool: &VestingPool,
    now: i64,
) -> std::result::Result<u64, VestingError> {
    let Some(entry) = entry else {
        return Ok(0);
    };
    if entry.claimed != 0 {
        return Ok(0);
    }
    if now < effective_unlock(pool.start_date, entry.unlock_ts) {
        return Ok(0);
    }
    percentage::compute_share(entry.allocation, pool.cumulative_amount_to_vest)
}

#[derive(Accounts)]
pub struct HasClaim<'info> {
    #[account(seeds = [b"vesting_pool"], bump)]
    pub pool: Account<'info, VestingPool>,

    #[account(
        seeds = [b"recipients", pool.key().as_ref()],
        bump
    )]
    pub recipients: Box<Account<'info, Recipients>>,

    pub claimant: Signer<'info>,
}

#[event]
pub struct ClaimableQuote {
    pub recipient: Pubkey,
    pub amount: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNLOCK: i64 = 1_700_000_000;

    fn pool() -> VestingPool {
        VestingPool {
            mint: Pubkey::new_unique(),
            admin: Pubkey::new_unique(),
            start_date: UNLOCK - 3600,
            paused: false,
            cumulative_amount_to_vest: 1_000_000,
            total_allocated_percentage: 90_000,
            claimed_supply: 0,
            recipient_count: 2,
        }
    }

    fn entry(allocation: u64) -> RecipientEntry {
        RecipientEntry {
            wallet: Pubkey::new_unique(),
            allocation,
            unlock_ts: UNLOCK,
            claimed_amount: 0,
            claimed: 0,
            _padding: [0u8; 7],
        }
    }

    #[test]
    fn quotes_share_once_unlocked() {
        let e = entry(80_000);
        assert_eq!(claimable_quote(Some(&e), &pool(), UNLOCK - 1).unwrap(), 0);
        assert_eq!(
            claimable_quote(Some(&e), &pool(), UNLOCK).unwrap(),
            800_000
        );
    }

    #[test]
    fn quotes_zero_for_unregistered_and_claimed() {
        assert_eq!(claimable_quote(None, &pool(), UNLOCK).unwrap(), 0);

        let mut e = entry(10_000);
        e.claimed = 1;
        e.claimed_amount = 100_000;
        assert_eq!(claimable_quote(Some(&e), &pool(), UNLOCK).unwrap(), 0);
    }
}
