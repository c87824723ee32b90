// User error messages. Each rejection reason has its own message so callers
// can tell them apart from the transaction result.

pub const ERR_BELOW_MINIMUM_STAKE: &str = "Below minimum stake";
pub const ERR_NO_ACTIVE_STAKE: &str = "No active stake";
pub const ERR_INSUFFICIENT_STAKE: &str = "Insufficient stake";
pub const ERR_ZERO_WITHDRAW_AMOUNT: &str = "Withdraw amount must be positive";
pub const ERR_STILL_LOCKED: &str = "Stake is still locked";
pub const ERR_INSUFFICIENT_RESERVE: &str = "Insufficient reserve";
pub const ERR_TRANSFER_FAILED: &str = "Transfer failed";
pub const ERR_ONLY_OWNER: &str = "Only owner";
pub const ERR_EMPTY_RESERVE_FUNDING: &str = "Reserve funding must be positive";
pub const ERR_REENTRANCY_REJECTED: &str = "Reentrant call rejected";
