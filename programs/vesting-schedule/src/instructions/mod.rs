pub mod initialize_pool;
pub mod add_recipient;
pub mod add_multiple_recipients;
pub mod deposit_tokens;
pub mod claim;
pub mod has_claim;
pub mod pause;
pub mod unpause;
pub mod set_start_date;
pub mod admin_withdraw;

pub use initialize_pool::*;
pub use add_recipient::*;
pub use add_multiple_recipients::*;
pub use deposit_tokens::*;
pub use claim::*;
pub use has_claim::*;
pub use pause::*;
pub use unpause::*;
pub use set_start_date::*;
pub use admin_withdraw::*;
