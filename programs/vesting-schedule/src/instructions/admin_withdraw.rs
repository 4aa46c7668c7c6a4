use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::VestingPool;

pub fn admin_withdraw(ctx: Context<AdminWithdraw>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidInput);

    let pool = &ctx.accounts.pool;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        pool.admin,
        VestingError::Unauthorized
    );

    // NOTE: Admin withdrawal is allowed at any time by explicit request.

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
    require_keys_eq!(
        ctx.accounts.admin_destination.mint,
        pool.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_destination.owner,
        ctx.accounts.admin.key(),
        VestingError::InvalidTokenAccount
    );

    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::InsufficientVaultBalance
    );

    let signer_seeds: &[&[&[u8]]] = &[&[b"vesting_pool", &[ctx.bumps.pool]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.admin_destination.to_account_info(),
                authority: ctx.accounts.pool.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(AdminWithdrawn {
        admin: pool.admin,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AdminWithdraw<'info> {
    #[account(mut, seeds = [b"vesting_pool"], bump)]
    pub pool: Account<'info, VestingPool>,

    #[account(
        mut,
        seeds = [b"vault", pool.key().as_ref()],
        bump,
        constraint = vault.mint == pool.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_destination: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct AdminWithdrawn {
    pub admin: Pubkey,
    pub amount: u64,
}
