multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Stake Record: one per staker address
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct StakeRecord<M: ManagedTypeApi> {
    /// Principal deposited and not yet withdrawn
    pub amount_staked: BigUint<M>,
    /// Block timestamp of the most recent deposit
    pub time_staked: u64,
    /// Withdrawals are rejected before this timestamp
    pub time_can_unstake: u64,
    /// Active position flag. A fully withdrawn record keeps existing
    /// with zeroed fields, so this is what callers must check.
    pub has_staked: bool,
}

impl<M: ManagedTypeApi> StakeRecord<M> {
    /// Record of an address that never staked.
    pub fn empty() -> Self {
        StakeRecord {
            amount_staked: BigUint::zero(),
            time_staked: 0,
            time_can_unstake: 0,
            has_staked: false,
        }
    }

    pub fn open(amount: BigUint<M>, now: u64, lock_duration: u64) -> Self {
        StakeRecord {
            amount_staked: amount,
            time_staked: now,
            time_can_unstake: now.saturating_add(lock_duration),
            has_staked: true,
        }
    }

    /// Adds to an active position. The whole balance re-enters the lock
    /// window, previously locked funds included.
    pub fn top_up(&mut self, amount: &BigUint<M>, now: u64, lock_duration: u64) {
        self.amount_staked += amount;
        self.time_staked = now;
        self.time_can_unstake = now.saturating_add(lock_duration);
    }

    pub fn is_unlocked(&self, now: u64) -> bool {
        now >= self.time_can_unstake
    }

    /// Removes `principal` from the position; caller has checked it fits.
    pub fn release(&mut self, principal: &BigUint<M>) {
        self.amount_staked -= principal;
        if self.amount_staked == 0u64 {
            self.has_staked = false;
        }
    }
}
