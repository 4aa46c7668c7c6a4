use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::RecipientInput;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod vesting_schedule {
    use super::*;

    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        start_date: i64,
        cumulative_amount_to_vest: u64,
    ) -> Result<()> {
        instructions::initialize_pool::initialize_pool(ctx, start_date, cumulative_amount_to_vest)
    }

    pub fn add_recipient(
        ctx: Context<AddRecipient>,
        wallet: Pubkey,
        allocation: u64,
        unlock_ts: i64,
    ) -> Result<()> {
        instructions::add_recipient::add_recipient(ctx, wallet, allocation, unlock_ts)
    }

    pub fn add_multiple_recipients(
        ctx: Context<AddMultipleRecipients>,
        inputs: Vec<RecipientInput>,
    ) -> Result<()> {
        instructions::add_multiple_recipients::add_multiple_recipients(ctx, inputs)
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::claim(ctx)
    }

    pub fn has_claim(ctx: Context<HasClaim>) -> Result<()> {
        instructions::has_claim::has_claim(ctx)
    }

    pub fn vesting_pause(ctx: Context<VestingPause>) -> Result<()> {
        instructions::pause::vesting_pause(ctx)
    }

    pub fn vesting_unpause(ctx: Context<VestingUnpause>) -> Result<()> {
        instructions::unpause::vesting_unpause(ctx)
    }

    pub fn set_start_date(ctx: Context<SetStartDate>, new_start_date: i64) -> Result<()> {
        instructions::set_start_date::set_start_date(ctx, new_start_date)
    }

    pub fn admin_withdraw(ctx: Context<AdminWithdraw>, amount: u64) -> Result<()> {
        instructions::admin_withdraw::admin_withdraw(ctx, amount)
    }
}
