use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingPool;

pub fn vesting_unpause(ctx: Context<VestingUnpause>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        pool.admin,
        VestingError::Unauthorized
    );
    require!(pool.paused, VestingError::VestingNotPaused);
    pool.paused = false;
    emit!(PoolUnpaused { admin: pool.admin });
    Ok(())
}

#[derive(Accounts)]
pub struct VestingUnpause<'info> {
    #[account(mut, seeds = [b"vesting_pool"], bump)]
    pub pool: Account<'info, VestingPool>,
    pub admin: Signer<'info>,
}

#[event]
pub struct PoolUnpaused {
    pub admin: Pubkey,
}
