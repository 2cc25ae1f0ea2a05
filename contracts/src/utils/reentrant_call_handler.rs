//! Raw contract calls with reentrancy-aware storage handling.
//!
//! With the `reentrant` feature enabled, the callee may legally reenter the
//! calling contract before the call returns, so cached storage values must
//! be flushed to persistent storage before control leaves the contract.
//! [`ReentrantCallHandler`] wraps [`RawCall`] invocation behind that switch:
//! with the feature on, the storage cache is flushed first; with it off, the
//! call is issued directly.

use alloy_primitives::Address;
use stylus_sdk::{call::RawCall, ArbResult};

/// Extension trait issuing a [`RawCall`] with reentrancy safeguards.
pub trait ReentrantCallHandler {
    /// Performs the call to `contract` with `call_data`, flushing the
    /// storage cache beforehand when the `reentrant` feature is enabled.
    ///
    /// Applies to any configured [`RawCall`], including value-carrying ones.
    ///
    /// # Arguments
    ///
    /// * `contract` - Address of the contract being called.
    /// * `call_data` - ABI-encoded payload for the call.
    ///
    /// # Errors
    ///
    /// * Returns [`stylus_sdk::ArbResult`] indicating the success or failure
    ///   of the call.
    fn call_with_reentrant_handling(
        self,
        contract: Address,
        call_data: &[u8],
    ) -> ArbResult;
}

impl ReentrantCallHandler for RawCall {
    fn call_with_reentrant_handling(
        self,
        contract: Address,
        call_data: &[u8],
    ) -> ArbResult {
        #[cfg(feature = "reentrant")]
        unsafe {
            self.flush_storage_cache().call(contract, call_data)
        }
        #[cfg(not(feature = "reentrant"))]
        unsafe {
            self.call(contract, call_data)
        }
    }
}
