use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{RecipientEntry, Recipients, VestingPool};
use crate::utils::percentage;

pub fn claim(ctx: Context<Claim>) -> Result<()> {
    // Avoid borrow checker conflicts: capture AccountInfos/keys before taking
    // mutable borrows.
    let pool_ai = ctx.accounts.pool.to_account_info();
    let pool_bump = ctx.bumps.pool;
    let claimant = ctx.accounts.claimant.key();

    let pool = &mut ctx.accounts.pool;

    let now = Clock::get()?.unix_timestamp;
    let recipients = &mut ctx.accounts.recipients;
    let idx = recipients
        .entries
        .iter()
        .take(pool.recipient_count as usize)
        .position(|e| e.wallet == claimant);
    let snapshot = idx.map(|i| recipients.entries[i]);

    let amount = match evaluate_claim(snapshot.as_ref(), pool, now)? {
        ClaimOutcome::Payout(amount) => amount,
        // Unregistered and already-claimed callers get a zero claim, never
        // an error.
        ClaimOutcome::NoEntry | ClaimOutcome::AlreadyClaimed => {
            emit!(TokensClaimed {
                recipient: claimant,
                amount: 0,
            });
            return Ok(());
        }
    };

    // Token account checks only gate the paying path; zero claims above
    // succeed regardless of account shape.
    require_keys_eq!(
        ctx.accounts.mint.key(),
        pool.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.vault.mint,
        pool.mint,
        VestingError::InvalidTokenMint
    );
    let expected_ata = expected_ata_address(&claimant, &pool.mint);
    require_keys_eq!(
        ctx.accounts.claimant_token_account.key(),
        expected_ata,
        VestingError::InvalidRecipientAta
    );
    // Strict ATA checks (pre-created ATA policy).
    require_keys_eq!(
        ctx.accounts.claimant_token_account.mint,
        pool.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.claimant_token_account.owner,
        claimant,
        VestingError::InvalidTokenAccount
    );
    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::InsufficientVaultBalance
    );

    // CPI transfer from vault to claimant ATA, signed by pool PDA.
    let signer_seeds: &[&[&[u8]]] = &[&[b"vesting_pool", &[pool_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.claimant_token_account.to_account_info(),
                authority: pool_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    // Payout implies a registered entry.
    if let Some(i) = idx {
        recipients.entries[i].claimed = 1;
        recipients.entries[i].claimed_amount = amount;
    }
    pool.claimed_supply = pool
        .claimed_supply
        .checked_add(amount)
        .ok_or(VestingError::MathOverflow)?;

    emit!(TokensClaimed {
        recipient: claimant,
        amount,
    });

    Ok(())
}

/// Claim decision for a caller, separated from account plumbing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ClaimOutcome {
    /// Caller has no registered allocation.
    NoEntry,
    /// Share already disbursed; terminal.
    AlreadyClaimed,
    /// Full share to transfer now.
    Payout(u64),
}

pub(crate) fn evaluate_claim(
    entry: Option<&RecipientEntry>,
    pool: &VestingPool,
    now: i64,
) -> std::result::Result<ClaimOutcome, VestingError> {
    if pool.paused {
        return Err(VestingError::VestingPaused);
    }
    let Some(entry) = entry else {
        return Ok(ClaimOutcome::NoEntry);
    };
    if entry.claimed != 0 {
        return Ok(ClaimOutcome::AlreadyClaimed);
    }
    if now < effective_unlock(pool.start_date, entry.unlock_ts) {
        return Err(VestingError::VestingNotEnded);
    }
    let amount = percentage::compute_share(entry.allocation, pool.cumulative_amount_to_vest)?;
    Ok(ClaimOutcome::Payout(amount))
}

/// A recipient unlocks at their own timestamp or the pool start, whichever
/// is later.
pub(crate) fn effective_unlock(start_date: i64, unlock_ts: i64) -> i64 {
    start_date.max(unlock_ts)
}

fn expected_ata_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    // ATA derivation: PDA(owner, token_program_id, mint) with associated
    // token program id.
    let seeds: &[&[u8]] = &[
        owner.as_ref(),
        anchor_spl::token::ID.as_ref(),
        mint.as_ref(),
    ];
    let (ata, _) = Pubkey::find_program_address(seeds, &anchor_spl::associated_token::ID);
    ata
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut, seeds = [b"vesting_pool"], bump)]
    pub pool: Account<'info, VestingPool>,

    #[account(
        mut,
        seeds = [b"recipients", pool.key().as_ref()],
        bump
    )]
    pub recipients: Box<Account<'info, Recipients>>,

    #[account(
        mut,
        seeds = [b"vault", pool.key().as_ref()],
        bump,
        constraint = vault.mint == pool.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub claimant_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub claimant: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub recipient: Pubkey,
    pub amount: u64,
}
