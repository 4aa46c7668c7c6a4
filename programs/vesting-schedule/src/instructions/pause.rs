use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingPool;

pub fn vesting_pause(ctx: Context<VestingPause>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        pool.admin,
        VestingError::Unauthorized
    );
    require!(!pool.paused, VestingError::VestingPaused);
    pool.paused = true;
    emit!(PoolPaused { admin: pool.admin });
    Ok(())
}

#[derive(Accounts)]
pub struct VestingPause<'info> {
    #[account(mut, seeds = [b"vesting_pool"], bump)]
    pub pool: Account<'info, VestingPool>,
    pub admin: Signer<'info>,
}

#[event]
pub struct PoolPaused {
    pub admin: Pubkey,
}
