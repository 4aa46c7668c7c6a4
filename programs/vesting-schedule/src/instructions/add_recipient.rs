use anchor_lang::prelude::*;

use crate::constants::{MAX_RECIPIENTS, PERCENTAGE_SCALE};
use crate::error::VestingError;
use crate::state::{RecipientEntry, RecipientInput, Recipients, VestingPool};

pub fn add_recipient(
    ctx: Context<AddRecipient>,
    wallet: Pubkey,
    allocation: u64,
    unlock_ts: i64,
) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        pool.admin,
        VestingError::Unauthorized
    );

    push_recipient(
        pool,
        &mut ctx.accounts.recipients,
        &RecipientInput {
            wallet,
            allocation,
            unlock_ts,
        },
    )?;

    Ok(())
}

/// Validates and appends one entry, keeping the allocation-sum invariant.
/// Shared with `add_multiple_recipients`; any `Err` leaves pool and list
/// untouched for this entry, and instruction-level atomicity reverts the
/// rest.
pub(crate) fn push_recipient(
    pool: &mut VestingPool,
    recipients: &mut Recipients,
    input: &RecipientInput,
) -> std::result::Result<(), VestingError> {
    if input.wallet == Pubkey::default() {
        return Err(VestingError::InvalidPubkey);
    }
    if input.allocation == 0 {
        return Err(VestingError::InvalidInput);
    }
    if input.unlock_ts <= 0 {
        return Err(VestingError::InvalidTimestamp);
    }
    if (pool.recipient_count as usize) >= MAX_RECIPIENTS {
        return Err(VestingError::RecipientListFull);
    }
    for e in recipients
        .entries
        .iter()
        .take(pool.recipient_count as usize)
    {
        if e.wallet == input.wallet {
            return Err(VestingError::DuplicateRecipient);
        }
    }

    let new_total = checked_total_allocation(pool.total_allocated_percentage, input.allocation)?;

    let idx = pool.recipient_count as usize;
    recipients.entries[idx] = RecipientEntry {
        wallet: input.wallet,
        allocation: input.allocation,
        unlock_ts: input.unlock_ts,
        claimed_amount: 0,
        claimed: 0,
        _padding: [0u8; 7],
    };
    pool.recipient_count = pool
        .recipient_count
        .checked_add(1)
        .ok_or(VestingError::MathOverflow)?;
    pool.total_allocated_percentage = new_total;

    emit!(RecipientAdded {
        recipient: input.wallet,
        allocation: input.allocation,
    });

    Ok(())
}

/// New cumulative allocation after accepting `allocation`, or
/// `AllocationExceeded` if it would pass 100% of the pool.
pub(crate) fn checked_total_allocation(
    current: u64,
    allocation: u64,
) -> std::result::Result<u64, VestingError> {
    let next = current
        .checked_add(allocation)
        .ok_or(VestingError::MathOverflow)?;
    if next > PERCENTAGE_SCALE {
        return Err(VestingError::AllocationExceeded);
    }
    Ok(next)
}

#[derive(Accounts)]
pub struct AddRecipient<'info> {
    #[account(mut, seeds = [b"vesting_pool"], bump)]
    pub pool: Account<'info, VestingPool>,

    #[account(
        mut,
        seeds = [b"recipients", pool.key().as_ref()],
        bump
    )]
    pub recipients: Box<Account<'info, Recipients>>,

    #[account(mut)]
    pub admin: Signer<'info>,
}

#[event]
pub struct RecipientAdded {
    pub recipient: Pubkey,
    pub allocation: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::Zeroable;

    fn empty_pool() -> VestingPool {
        VestingPool {
            mint: Pubkey::new_unique(),
            admin: Pubkey::new_unique(),
            start_date: 1,
            paused: false,
            cumulative_amount_to_vest: 1_000_000,
            total_allocated_percentage: 0,
            claimed_supply: 0,
            recipient_count: 0,
        }
    }

    fn empty_list() -> Recipients {
        Recipients {
            entries: [RecipientEntry::zeroed(); MAX_RECIPIENTS],
        }
    }

    fn input(allocation: u64) -> RecipientInput {
        RecipientInput {
            wallet: Pubkey::new_unique(),
            allocation,
            unlock_ts: 1_700_000_000,
        }
    }

    #[test]
    fn total_allocation_caps_at_full_scale() {
        assert_eq!(checked_total_allocation(0, PERCENTAGE_SCALE).unwrap(), PERCENTAGE_SCALE);
        assert!(matches!(
            checked_total_allocation(PERCENTAGE_SCALE, 1),
            Err(VestingError::AllocationExceeded)
        ));
        assert!(matches!(
            checked_total_allocation(u64::MAX, 1),
            Err(VestingError::MathOverflow)
        ));
    }

    #[test]
    fn over_allocation_leaves_prior_entries_unchanged() {
        let mut pool = empty_pool();
        let mut list = empty_list();
        let a = input(10_000);
        let b = input(80_000);
        push_recipient(&mut pool, &mut list, &a).unwrap();
        push_recipient(&mut pool, &mut list, &b).unwrap();
        assert_eq!(pool.total_allocated_percentage, 90_000);

        let err = push_recipient(&mut pool, &mut list, &input(20_000)).unwrap_err();
        assert!(matches!(err, VestingError::AllocationExceeded));
        assert_eq!(pool.recipient_count, 2);
        assert_eq!(pool.total_allocated_percentage, 90_000);
        assert_eq!(list.entries[0].wallet, a.wallet);
        assert_eq!(list.entries[1].allocation, 80_000);
    }

    #[test]
    fn rejects_duplicates_and_zero_allocations() {
        let mut pool = empty_pool();
        let mut list = empty_list();
        let a = input(10_000);
        push_recipient(&mut pool, &mut list, &a).unwrap();

        assert!(matches!(
            push_recipient(&mut pool, &mut list, &a),
            Err(VestingError::DuplicateRecipient)
        ));
        assert!(matches!(
            push_recipient(&mut pool, &mut list, &input(0)),
            Err(VestingError::InvalidInput)
        ));
        assert!(matches!(
            push_recipient(
                &mut pool,
                &mut list,
                &RecipientInput {
                    wallet: Pubkey::default(),
                    allocation: 1,
                    unlock_ts: 1
                }
            ),
            Err(VestingError::InvalidPubkey)
        ));
        assert_eq!(pool.recipient_count, 1);
    }

    #[test]
    fn rejects_when_list_is_full() {
        let mut pool = empty_pool();
        let mut list = empty_list();
        for _ in 0..MAX_RECIPIENTS {
            push_recipient(&mut pool, &mut list, &input(2)).unwrap();
        }
        assert!(matches!(
            push_recipient(&mut pool, &mut list, &input(2)),
            Err(VestingError::RecipientListFull)
        ));
    }
}
