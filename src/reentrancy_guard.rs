multiversx_sc::imports!();

use crate::errors::ERR_REENTRANCY_REJECTED;

#[multiversx_sc::module]
pub trait ReentrancyGuardModule {
    /// Runs `body` with the re-entrancy flag raised.
    ///
    /// Entering while the flag is already up fails immediately, it never waits.
    /// Any failure inside `body` reverts the whole transaction, flag included,
    /// so only the success path lowers it here.
    fn with_reentrancy_guard<R, Body>(&self, body: Body) -> R
    where
        Body: FnOnce() -> R,
    {
        require!(!self.reentrancy_locked().get(), ERR_REENTRANCY_REJECTED);
        self.reentrancy_locked().set(true);

        let result = body();

        self.reentrancy_locked().set(false);
        result
    }

    #[view(isReentrancyLocked)]
    #[storage_mapper("reentrancyLocked")]
    fn reentrancy_locked(&self) -> SingleValueMapper<bool>;
}
