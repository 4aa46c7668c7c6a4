use anchor_lang::prelude::*;

use crate::constants::MAX_BATCH_ADD;
use crate::error::VestingError;
use crate::instructions::add_recipient::push_recipient;
use crate::state::{RecipientInput, Recipients, VestingPool};

pub fn add_multiple_recipients(
    ctx: Context<AddMultipleRecipients>,
    inputs: Vec<RecipientInput>,
) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        pool.admin,
        VestingError::Unauthorized
    );
    require!(!inputs.is_empty(), VestingError::InvalidInput);
    require!(inputs.len() <= MAX_BATCH_ADD, VestingError::BatchTooLarge);

    // Entries land in the list one by one, so the duplicate scan in
    // push_recipient also catches duplicates within the batch itself. Any
    // failure reverts the whole instruction; no partial batch is committed.
    let recipients = &mut ctx.accounts.recipients;
    for input in inputs.iter() {
        push_recipient(pool, recipients, input)?;
    }

    Ok(())
}

#[derive(Accounts)]
pub struct AddMultipleRecipients<'info> {
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
