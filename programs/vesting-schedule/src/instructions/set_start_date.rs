use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingPool;

pub fn set_start_date(ctx: Context<SetStartDate>, new_start_date: i64) -> Result<()> {
    require!(new_start_date > 0, VestingError::InvalidTimestamp);

    let pool = &mut ctx.accounts.pool;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        pool.admin,
        VestingError::Unauthorized
    );

    let old = pool.start_date;
    pool.start_date = new_start_date;

    emit!(StartDateUpdated {
        admin: pool.admin,
        old_start_date: old,
        new_start_date,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetStartDate<'info> {
    #[account(mut, seeds = [b"vesting_pool"], bump)]
    pub pool: Account<'info, VestingPool>,

    pub admin: Signer<'info>,
}

#[event]
pub struct StartDateUpdated {
    pub admin: Pubkey,
    pub old_start_date: i64,
    pub new_start_date: i64,
}
