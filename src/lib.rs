#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod reentrancy_guard;
pub mod types;

use errors::*;
use types::StakeRecord;

// ============================================================
// Constants
// ============================================================

/// Smallest accepted deposit: 1 EGLD
pub const MINIMUM_STAKE: u64 = 1_000_000_000_000_000_000;

/// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait StakingLedger: reentrancy_guard::ReentrancyGuardModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, lock_duration: u64, interest_rate_bps: u64) {
        let caller = self.blockchain().get_caller();
        self.owner().set(&caller);
        self.lock_duration().set(lock_duration);
        self.interest_rate_bps().set(interest_rate_bps);
        self.total_staked().set(BigUint::zero());
        self.reentrancy_locked().set(false);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: deposit
    // Opens a position or tops one up. Either way the lock restarts.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self) {
        self.with_reentrancy_guard(|| {
            let caller = self.blockchain().get_caller();
            let value = self.call_value().egld_value().clone_value();
            require!(value >= MINIMUM_STAKE, ERR_BELOW_MINIMUM_STAKE);

            let now = self.blockchain().get_block_timestamp();
            let lock_duration = self.lock_duration().get();

            let mut record = self.stake_record(&caller);
            if record.has_staked {
                record.top_up(&value, now, lock_duration);
            } else {
                record = StakeRecord::open(value.clone(), now, lock_duration);
                self.stakers().insert(caller.clone());
            }

            self.stakes(&caller).set(&record);
            self.total_staked().update(|total| *total += &value);

            self.deposited_event(&caller, &value, now);
        });
    }

    // ========================================================
    // ENDPOINT: withdrawPartial / withdrawAll
    //
    // Interest is paid on the FULL staked balance, not on the
    // withdrawn part. Two partial withdrawals therefore pay more
    // interest in total than a single withdrawAll.
    // ========================================================

    /// Pays `amount` of principal plus interest on the full balance.
    /// A zero `amount` is rejected, otherwise it would claim that
    /// interest again without returning any principal.
    #[endpoint(withdrawPartial)]
    fn withdraw_partial(&self, amount: BigUint) -> bool {
        self.with_reentrancy_guard(|| {
            let caller = self.blockchain().get_caller();
            let record = self.active_record(&caller);
            require!(amount > 0u64, ERR_ZERO_WITHDRAW_AMOUNT);
            require!(amount <= record.amount_staked, ERR_INSUFFICIENT_STAKE);

            self.settle_withdrawal(&caller, record, amount)
        })
    }

    #[endpoint(withdrawAll)]
    fn withdraw_all(&self) -> bool {
        self.with_reentrancy_guard(|| {
            let caller = self.blockchain().get_caller();
            let record = self.active_record(&caller);
            let principal = record.amount_staked.clone();

            self.settle_withdrawal(&caller, record, principal)
        })
    }

    // ========================================================
    // OWNER ENDPOINTS
    // ========================================================

    /// New rate applies to every later withdrawal, including
    /// positions opened under the old rate.
    #[endpoint(updateInterestRate)]
    fn update_interest_rate(&self, new_rate_bps: u64) {
        self.require_owner();

        let old_rate_bps = self.interest_rate_bps().get();
        self.interest_rate_bps().set(new_rate_bps);

        self.rate_updated_event(old_rate_bps, new_rate_bps);
    }

    #[endpoint(fundReserve)]
    #[payable("EGLD")]
    fn fund_reserve(&self) {
        self.require_owner();

        let value = self.call_value().egld_value().clone_value();
        require!(value > 0u64, ERR_EMPTY_RESERVE_FUNDING);

        self.reserve_funded_event(&self.owner().get(), &value);
    }

    /// Sends the whole balance to the owner, staker claims included.
    /// Positions stay on the books but are no longer backed.
    #[endpoint(emergencyDrain)]
    fn emergency_drain(&self) {
        self.require_owner();

        self.with_reentrancy_guard(|| {
            let owner = self.owner().get();
            let balance = self.reserve();
            if balance > 0u64 {
                self.send_payout(&owner, &balance);
            }

            self.emergency_drained_event(&owner, &balance);
        });
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn stake_record(&self, staker: &ManagedAddress) -> StakeRecord<Self::Api> {
        let mapper = self.stakes(staker);
        if mapper.is_empty() {
            StakeRecord::empty()
        } else {
            mapper.get()
        }
    }

    fn active_record(&self, staker: &ManagedAddress) -> StakeRecord<Self::Api> {
        let record = self.stake_record(staker);
        require!(record.has_staked, ERR_NO_ACTIVE_STAKE);
        record
    }

    /// Lock and solvency checks, then bookkeeping, then the transfer.
    fn settle_withdrawal(
        &self,
        staker: &ManagedAddress,
        mut record: StakeRecord<Self::Api>,
        principal: BigUint,
    ) -> bool {
        let now = self.blockchain().get_block_timestamp();
        require!(record.is_unlocked(now), ERR_STILL_LOCKED);

        let interest = self.compute_interest(&record.amount_staked);
        let payout = &principal + &interest;
        require!(self.reserve() >= payout, ERR_INSUFFICIENT_RESERVE);

        record.release(&principal);
        if !record.has_staked {
            self.stakers().swap_remove(staker);
        }
        self.stakes(staker).set(&record);
        self.total_staked().update(|total| *total -= &principal);

        self.send_payout(staker, &payout);

        self.withdrawn_event(staker, &principal, &interest, now);
        true
    }

    fn compute_interest(&self, principal: &BigUint) -> BigUint {
        let rate_bps = self.interest_rate_bps().get();
        (principal * rate_bps) / BPS_DENOMINATOR
    }

    fn send_payout(&self, to: &ManagedAddress, amount: &BigUint) {
        let result = self.send_raw().direct_egld_execute(
            to,
            amount,
            0,
            &ManagedBuffer::new(),
            &ManagedArgBuffer::new(),
        );
        if result.is_err() {
            sc_panic!(ERR_TRANSFER_FAILED);
        }
    }

    fn reserve(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERR_ONLY_OWNER);
    }

    // ========================================================
    // VIEWS: read-only queries
    // ========================================================

    #[view(getStakeInfo)]
    fn get_stake_info(&self, staker: ManagedAddress) -> StakeRecord<Self::Api> {
        self.stake_record(&staker)
    }

    /// (principal, interest) that withdrawAll would pay right now.
    #[view(getPendingPayout)]
    fn get_pending_payout(&self, staker: ManagedAddress) -> MultiValue2<BigUint, BigUint> {
        let record = self.stake_record(&staker);
        if !record.has_staked {
            return (BigUint::zero(), BigUint::zero()).into();
        }
        let interest = self.compute_interest(&record.amount_staked);
        (record.amount_staked, interest).into()
    }

    #[view(getReserve)]
    fn get_reserve(&self) -> BigUint {
        self.reserve()
    }

    #[view(getMinimumStake)]
    fn get_minimum_stake(&self) -> BigUint {
        BigUint::from(MINIMUM_STAKE)
    }

    #[view(getActiveStakers)]
    fn get_active_stakers(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.stakers().len();
        let start = from as usize;
        let end = core::cmp::min(start.saturating_add(count as usize), total);

        for (idx, staker) in self.stakers().iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= start {
                result.push(staker);
            }
        }
        result
    }

    #[view(getLedgerConfig)]
    fn get_ledger_config(&self) -> MultiValue4<BigUint, u64, u64, ManagedAddress> {
        let min_stake = BigUint::from(MINIMUM_STAKE);
        let lock = self.lock_duration().get();
        let rate = self.interest_rate_bps().get();
        let owner = self.owner().get();
        (min_stake, lock, rate, owner).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("deposited")]
    fn deposited_event(
        &self,
        #[indexed] staker: &ManagedAddress,
        #[indexed] amount: &BigUint,
        timestamp: u64,
    );

    #[event("withdrawn")]
    fn withdrawn_event(
        &self,
        #[indexed] staker: &ManagedAddress,
        #[indexed] principal: &BigUint,
        #[indexed] interest: &BigUint,
        timestamp: u64,
    );

    #[event("rateUpdated")]
    fn rate_updated_event(&self, #[indexed] old_rate_bps: u64, #[indexed] new_rate_bps: u64);

    #[event("reserveFunded")]
    fn reserve_funded_event(&self, #[indexed] owner: &ManagedAddress, amount: &BigUint);

    #[event("emergencyDrained")]
    fn emergency_drained_event(&self, #[indexed] owner: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[view(getOwner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getLockDuration)]
    #[storage_mapper("lockDuration")]
    fn lock_duration(&self) -> SingleValueMapper<u64>;

    #[view(getInterestRate)]
    #[storage_mapper("interestRateBps")]
    fn interest_rate_bps(&self) -> SingleValueMapper<u64>;

    // ── Positions ──

    #[storage_mapper("stakes")]
    fn stakes(&self, staker: &ManagedAddress) -> SingleValueMapper<StakeRecord<Self::Api>>;

    #[storage_mapper("stakers")]
    fn stakers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getTotalStaked)]
    #[storage_mapper("totalStaked")]
    fn total_staked(&self) -> SingleValueMapper<BigUint>;
}
