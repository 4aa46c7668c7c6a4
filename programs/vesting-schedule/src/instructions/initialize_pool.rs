use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use bytemuck::Zeroable;

use crate::constants::MAX_RECIPIENTS;
use crate::error::VestingError;
use crate::state::{RecipientEntry, Recipients, VestingPool};

pub fn initialize_pool(
    ctx: Context<InitializePool>,
    start_date: i64,
    cumulative_amount_to_vest: u64,
) -> Result<()> {
    require!(cumulative_amount_to_vest > 0, VestingError::InvalidInput);
    require!(start_date > 0, VestingError::InvalidTimestamp);

    let pool = &mut ctx.accounts.pool;
    pool.mint = ctx.accounts.mint.key();
    pool.admin = ctx.accounts.admin.key();
    pool.start_date = start_date;
    pool.paused = false;
    pool.cumulative_amount_to_vest = cumulative_amount_to_vest;
    pool.total_allocated_percentage = 0;
    pool.claimed_supply = 0;
    pool.recipient_count = 0;

    // Initialize recipients list as empty (deterministic insertion order).
    let recipients = &mut ctx.accounts.recipients;
    recipients.entries = [RecipientEntry::zeroed(); MAX_RECIPIENTS];

    emit!(PoolInitialized {
        mint: pool.mint,
        admin: pool.admin,
        start_date: pool.start_date,
        cumulative_amount_to_vest: pool.cumulative_amount_to_vest,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + VestingPool::SIZE,
        seeds = [b"vesting_pool"],
        bump
    )]
    pub pool: Account<'info, VestingPool>,

    #[account(
        init,
        payer = admin,
        space = Recipients::space(),
        seeds = [b"recipients", pool.key().as_ref()],
        bump
    )]
    pub recipients: Box<Account<'info, Recipients>>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = pool,
        seeds = [b"vault", pool.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct PoolInitialized {
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub start_date: i64,
    pub cumulative_amount_to_vest: u64,
}
