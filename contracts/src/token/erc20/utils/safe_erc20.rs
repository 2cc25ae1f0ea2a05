//! Wrappers around ERC-20 operations that throw on failure (when the token
//! contract returns false).
//!
//! Tokens that return no value (and instead revert or throw on failure) are
//! also supported: non-reverting calls are assumed to be successful. Beyond
//! plain transfers and approvals, the wrappers cover signature-based permits
//! (EIP-2612 or caller-encoded variants), transfers routed through the
//! Permit2 allowance singleton, and deposit/withdraw operations of
//! wrapped-native-asset tokens such as WETH.
//!
//! Every operation issues exactly one external call and classifies the raw
//! outcome; nothing is cached between calls and nothing is retried, except
//! for [`ISafeErc20::force_approve`]'s documented zero-out fallback.

use alloc::{vec, vec::Vec};

use alloy_primitives::{address, aliases::U160, Address, B256, U256};
use alloy_sol_types::SolCall;
pub use sol::*;
use stylus_sdk::{
    abi::Bytes,
    call::{call, Call, MethodError, RawCall},
    contract,
    prelude::{storage, HostAccess, StorageType, TopLevelStorage},
    stylus_proc::{public, SolidityError},
    types::AddressVM,
};

use crate::{utils::ReentrantCallHandler, WORD_BYTES};

/// Canonical deployment address of the Permit2 allowance-transfer singleton,
/// identical on every chain it has been deployed to.
pub const PERMIT2: Address =
    address!("000000000022D473030F116dDEE9F6B43aC78BA3");

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// An operation with an ERC-20 token failed.
        ///
        /// * `token` - Address of the ERC-20 token.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error SafeErc20FailedOperation(address token);

        /// Indicates a failed [`ISafeErc20::safe_decrease_allowance`] request.
        ///
        /// * `spender` - Address of future tokens' spender.
        /// * `current_allowance` - Current allowance of the `spender`.
        /// * `requested_decrease` - Requested decrease in allowance for `spender`.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error SafeErc20FailedDecreaseAllowance(
            address spender,
            uint256 current_allowance,
            uint256 requested_decrease
        );

        /// A native-currency transfer out of the calling contract failed.
        ///
        /// * `receiver` - Address the value was being forwarded to.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error SafeErc20FailedEthTransfer(address receiver);
    }
}

/// A [`SafeErc20`] error.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// An operation with an ERC-20 token failed.
    SafeErc20FailedOperation(SafeErc20FailedOperation),
    /// Indicates a failed [`ISafeErc20::safe_decrease_allowance`] request.
    SafeErc20FailedDecreaseAllowance(SafeErc20FailedDecreaseAllowance),
    /// A native-currency transfer out of the calling contract failed.
    SafeErc20FailedEthTransfer(SafeErc20FailedEthTransfer),
}

impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

pub use token::*;
mod token {
    #![allow(missing_docs)]
    #![cfg_attr(coverage_nightly, coverage(off))]
    alloy_sol_types::sol! {
        /// Interface of the ERC-20 token.
        interface IErc20 {
            function allowance(address owner, address spender) external view returns (uint256);
            function approve(address spender, uint256 value) external returns (bool);
            function balanceOf(address account) external view returns (uint256);
            function transfer(address to, uint256 value) external returns (bool);
            function transferFrom(address from, address to, uint256 value) external returns (bool);
        }

        /// EIP-2612 permit extension of the ERC-20 token.
        interface IErc20Permit {
            function permit(address owner, address spender, uint256 value, uint256 deadline, uint8 v, bytes32 r, bytes32 s) external;
        }

        /// Wrapped-native-asset token, e.g. WETH.
        interface IWeth {
            function deposit() external payable;
            function withdraw(uint256 value) external;
        }

        /// Allowance-transfer subset of the Permit2 singleton.
        interface IPermit2 {
            function transferFrom(address from, address to, uint160 amount, address token) external;
        }
    }
}

/// Shape of the raw bytes returned by a token call.
///
/// ERC-20 implementations disagree about what a successful call returns:
/// compliant tokens return an ABI-encoded boolean, legacy tokens return
/// nothing at all, and a few return data that decodes as neither. Decoding
/// into this explicit classification keeps the three behaviors distinct
/// instead of collapsing them into ad-hoc byte checks.
#[derive(Debug, PartialEq, Eq)]
enum ReturnDataKind {
    /// The call returned no data.
    Empty,
    /// The call returned an ABI-encoded boolean.
    Bool(bool),
    /// The call returned data that does not encode a single boolean.
    Malformed,
}

impl ReturnDataKind {
    /// Classifies `data` as returned by a token call.
    ///
    /// Accepts any width up to one word: the return buffer is already
    /// truncated to [`WORD_BYTES`] by the invoker.
    fn classify(data: &[u8]) -> Self {
        let Some((last, rest)) = data.split_last() else {
            return Self::Empty;
        };
        if !rest.iter().all(|&byte| byte == 0) {
            return Self::Malformed;
        }
        match last {
            0 => Self::Bool(false),
            1 => Self::Bool(true),
            _ => Self::Malformed,
        }
    }

    /// Whether the classified return data signals a successful operation.
    ///
    /// An empty return is a success: tokens that omit a return value revert
    /// on failure instead.
    fn is_success(&self) -> bool {
        matches!(self, Self::Empty | Self::Bool(true))
    }
}

/// State of a [`SafeErc20`] Contract.
#[storage]
pub struct SafeErc20 {}

/// NOTE: Implementation of [`TopLevelStorage`] to be able use `&mut self` when
/// calling other contracts and not `&mut (impl TopLevelStorage +
/// BorrowMut<Self>)`. Should be fixed in the future by the Stylus team.
unsafe impl TopLevelStorage for SafeErc20 {}

/// Required interface of a [`SafeErc20`] utility contract.
pub trait ISafeErc20 {
    /// The error type associated to this trait implementation.
    type Error: Into<alloc::vec::Vec<u8>>;

    /// Transfer `value` amount of `token` from the calling contract to `to`.
    /// If `token` returns no value, non-reverting calls are assumed to be
    /// successful.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `token` - Address of the ERC-20 token contract.
    /// * `to` - Account to transfer tokens to.
    /// * `value` - Number of tokens to transfer.
    ///
    /// # Errors
    ///
    /// * [`Error::SafeErc20FailedOperation`] - If the `token` address is not
    ///   a contract, the contract fails to execute the call or the call
    ///   returns value that is not `true`.
    fn safe_transfer(
        &mut self,
        token: Address,
        to: Address,
        value: U256,
    ) -> Result<(), Self::Error>;

    /// Transfer `value` amount of `token` from `from` to `to`, spending the
    /// approval given by `from` to the calling contract. If `token` returns
    /// no value, non-reverting calls are assumed to be successful.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `token` - Address of the ERC-20 token contract.
    /// * `from` - Account to transfer tokens from.
    /// * `to` - Account to transfer tokens to.
    /// * `value` - Number of tokens to transfer.
    ///
    /// # Errors
    ///
    /// * [`Error::SafeErc20FailedOperation`] - If the `token` address is not
    ///   a contract, the contract fails to execute the call or the call
    ///   returns value that is not `true`.
    fn safe_transfer_from(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), Self::Error>;

    /// Transfer `value` amount of `token` from `from` to `to`, routing the
    /// call either through the token's own allowance (`use_permit2` is
    /// `false`) or through the [`PERMIT2`] allowance singleton (`use_permit2`
    /// is `true`).
    ///
    /// Permit2 amounts are `uint160`; requesting a larger `value` on the
    /// Permit2 route fails without issuing a call.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `token` - Address of the ERC-20 token contract.
    /// * `from` - Account to transfer tokens from.
    /// * `to` - Account to transfer tokens to.
    /// * `value` - Number of tokens to transfer.
    /// * `use_permit2` - Route the transfer through the Permit2 singleton.
    ///
    /// # Errors
    ///
    /// * [`Error::SafeErc20FailedOperation`] - If the target contract fails
    ///   to execute the call, the call returns value that is not `true`, or
    ///   `value` does not fit the Permit2 amount width.
    fn safe_transfer_from_universal(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        value: U256,
        use_permit2: bool,
    ) -> Result<(), Self::Error>;

    /// Set the calling contract's allowance toward `spender` to `value`. If
    /// `token` returns no value, non-reverting calls are assumed to be
    /// successful. Meant to be used with tokens that require the approval
    /// to be set to zero before setting it to a non-zero value, such as USDT.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `token` - Address of the ERC-20 token contract.
    /// * `spender` - Account that will spend the tokens.
    /// * `value` - Value allowed to be spent by `spender`.
    ///
    /// # Errors
    ///
    /// * [`Error::SafeErc20FailedOperation`] - If the `token` address is not
    ///   a contract, the contract fails to execute the call or the call
    ///   returns value that is not `true`.
    fn force_approve(
        &mut self,
        token: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), Self::Error>;

    /// Increase the calling contract's allowance toward `spender` by
    /// `value`. If `token` returns no value, non-reverting calls are assumed
    /// to be successful.
    ///
    /// The current allowance is read fresh from the token; nothing is
    /// cached.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `token` - Address of the ERC-20 token contract.
    /// * `spender` - Account that will spend the tokens.
    /// * `value` - Value to increase current allowance for `spender`.
    ///
    /// # Errors
    ///
    /// * [`Error::SafeErc20FailedOperation`] - If the `token` address is not
    ///   a contract, the contract fails to execute the call or the call
    ///   returns value that is not `true`.
    ///
    /// # Panics
    ///
    /// * If increased allowance exceeds `U256::MAX`.
    fn safe_increase_allowance(
        &mut self,
        token: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), Self::Error>;

    /// Decrease the calling contract's allowance toward `spender` by
    /// `requested_decrease`. If `token` returns no value, non-reverting
    /// calls are assumed to be successful.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `token` - Address of the ERC-20 token contract.
    /// * `spender` - Account that will spend the tokens.
    /// * `requested_decrease` - Value to decrease current allowance for
    ///   `spender`.
    ///
    /// # Errors
    ///
    /// * [`Error::SafeErc20FailedOperation`] - If the `token` address is not
    ///   a contract, the contract fails to execute the call or the call
    ///   returns value that is not `true`.
    /// * [`Error::SafeErc20FailedDecreaseAllowance`] - If the current
    ///   allowance is less than `requested_decrease`.
    fn safe_decrease_allowance(
        &mut self,
        token: Address,
        spender: Address,
        requested_decrease: U256,
    ) -> Result<(), Self::Error>;

    /// Attempt an EIP-2612 permit call on `token`, setting `value` as the
    /// allowance of `spender` over `owner`'s tokens given `owner`'s signed
    /// approval.
    ///
    /// Failures of the underlying permit call are tolerated: the token may
    /// revert for reasons unrelated to signature validity, or the caller may
    /// have obtained sufficient allowance through another path, so the
    /// operation completes either way and never aborts the caller. Callers
    /// that depend on the allowance should verify it afterwards.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `token` - Address of the ERC-20 token contract.
    /// * `owner` - Account that owns the tokens.
    /// * `spender` - Account that will spend the tokens.
    /// * `value` - The number of tokens `spender` is permitted to transfer.
    /// * `deadline` - Deadline for the permit action.
    /// * `v` - v value from the `owner`'s signature.
    /// * `r` - r value from the `owner`'s signature.
    /// * `s` - s value from the `owner`'s signature.
    #[allow(clippy::too_many_arguments)]
    fn safe_permit(
        &mut self,
        token: Address,
        owner: Address,
        spender: Address,
        value: U256,
        deadline: U256,
        v: u8,
        r: B256,
        s: B256,
    );

    /// Attempt a permit call on `token` with caller-encoded call data,
    /// supporting permit variants beyond EIP-2612.
    ///
    /// The caller supplies the complete, pre-encoded permit payload;
    /// failures of the underlying call are tolerated exactly as in
    /// [`ISafeErc20::safe_permit`].
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `token` - Address of the ERC-20 token contract.
    /// * `permit_call` - Complete ABI-encoded permit call data.
    fn safe_permit_calldata(&mut self, token: Address, permit_call: Bytes);

    /// Returns the `token` balance of `account`.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `token` - Address of the ERC-20 token contract.
    /// * `account` - Account to read the balance of.
    ///
    /// # Errors
    ///
    /// * [`Error::SafeErc20FailedOperation`] - If the `token` address is not
    ///   a contract, the contract fails to execute the call or the returned
    ///   data is not exactly one word long.
    fn safe_balance_of(
        &mut self,
        token: Address,
        account: Address,
    ) -> Result<U256, Self::Error>;

    /// Returns the remaining number of `token` tokens that `spender` is
    /// allowed to spend on behalf of `owner`.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `token` - Address of the ERC-20 token contract.
    /// * `owner` - Account that owns the tokens.
    /// * `spender` - Account that will spend the tokens.
    ///
    /// # Errors
    ///
    /// * [`Error::SafeErc20FailedOperation`] - If the `token` address is not
    ///   a contract, the contract fails to execute the call or the returned
    ///   data is not exactly one word long.
    fn allowance(
        &mut self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, Self::Error>;

    /// Deposit `value` of native currency into the wrapped-native token
    /// `weth`, crediting the calling contract with wrapped tokens.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `weth` - Address of the wrapped-native token contract.
    /// * `value` - Amount of native currency to wrap.
    ///
    /// # Errors
    ///
    /// * [`Error::SafeErc20FailedOperation`] - If the `weth` address is not
    ///   a contract or the contract fails to execute the call.
    fn safe_deposit(
        &mut self,
        weth: Address,
        value: U256,
    ) -> Result<(), Self::Error>;

    /// Withdraw `value` of native currency from the wrapped-native token
    /// `weth` by burning the calling contract's wrapped tokens.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `weth` - Address of the wrapped-native token contract.
    /// * `value` - Amount of wrapped tokens to unwrap.
    ///
    /// # Errors
    ///
    /// * [`Error::SafeErc20FailedOperation`] - If the `weth` address is not
    ///   a contract or the contract fails to execute the call.
    fn safe_withdraw(
        &mut self,
        weth: Address,
        value: U256,
    ) -> Result<(), Self::Error>;

    /// Withdraw `value` of native currency from the wrapped-native token
    /// `weth` and forward it to `to`.
    ///
    /// The wrapped token pays the native currency out to the calling
    /// contract, which then forwards it; when `to` is the calling contract
    /// itself no forwarding call is issued.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `weth` - Address of the wrapped-native token contract.
    /// * `value` - Amount of wrapped tokens to unwrap.
    /// * `to` - Account to forward the unwrapped native currency to.
    ///
    /// # Errors
    ///
    /// * [`Error::SafeErc20FailedOperation`] - If the `weth` address is not
    ///   a contract or the contract fails to execute the call.
    /// * [`Error::SafeErc20FailedEthTransfer`] - If `to` refuses the
    ///   forwarded native currency.
    fn safe_withdraw_to(
        &mut self,
        weth: Address,
        value: U256,
        to: Address,
    ) -> Result<(), Self::Error>;
}

#[public]
impl ISafeErc20 for SafeErc20 {
    type Error = Error;

    fn safe_transfer(
        &mut self,
        token: Address,
        to: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        let call = IErc20::transferCall { to, value };

        Self::call_optional_return(token, &call.abi_encode())
    }

    fn safe_transfer_from(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        let call = IErc20::transferFromCall { from, to, value };

        Self::call_optional_return(token, &call.abi_encode())
    }

    fn safe_transfer_from_universal(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        value: U256,
        use_permit2: bool,
    ) -> Result<(), Self::Error> {
        if !use_permit2 {
            return self.safe_transfer_from(token, from, to, value);
        }

        if value.bit_len() > 160 {
            return Err(SafeErc20FailedOperation { token }.into());
        }
        let amount = value.to::<U160>();
        let call = IPermit2::transferFromCall { from, to, amount, token };

        Self::call_optional_return(PERMIT2, &call.abi_encode())
    }

    fn force_approve(
        &mut self,
        token: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        let approve_call = IErc20::approveCall { spender, value };

        // Try performing the approval with the desired value.
        if Self::call_optional_return(token, &approve_call.abi_encode())
            .is_ok()
        {
            return Ok(());
        }

        // If that fails, reset the allowance to zero, then retry the desired
        // approval. The zero-out call must fully complete before the retry
        // is issued.
        let reset_approval_call =
            IErc20::approveCall { spender, value: U256::ZERO };
        Self::call_optional_return(token, &reset_approval_call.abi_encode())?;
        Self::call_optional_return(token, &approve_call.abi_encode())
    }

    fn safe_increase_allowance(
        &mut self,
        token: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        let current_allowance =
            Self::allowance_of(token, contract::address(), spender)?;
        let new_allowance = current_allowance
            .checked_add(value)
            .expect("should not exceed `U256::MAX` for allowance");
        self.force_approve(token, spender, new_allowance)
    }

    fn safe_decrease_allowance(
        &mut self,
        token: Address,
        spender: Address,
        requested_decrease: U256,
    ) -> Result<(), Self::Error> {
        let current_allowance =
            Self::allowance_of(token, contract::address(), spender)?;

        if current_allowance < requested_decrease {
            return Err(SafeErc20FailedDecreaseAllowance {
                spender,
                current_allowance,
                requested_decrease,
            }
            .into());
        }

        self.force_approve(
            token,
            spender,
            current_allowance - requested_decrease,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn safe_permit(
        &mut self,
        token: Address,
        owner: Address,
        spender: Address,
        value: U256,
        deadline: U256,
        v: u8,
        r: B256,
        s: B256,
    ) {
        let call =
            IErc20Permit::permitCall { owner, spender, value, deadline, v, r, s };

        Self::call_tolerating_failure(token, &call.abi_encode());
    }

    fn safe_permit_calldata(&mut self, token: Address, permit_call: Bytes) {
        Self::call_tolerating_failure(token, &permit_call);
    }

    fn safe_balance_of(
        &mut self,
        token: Address,
        account: Address,
    ) -> Result<U256, Self::Error> {
        let call = IErc20::balanceOfCall { account };

        Self::call_returning_word(token, &call.abi_encode())
    }

    fn allowance(
        &mut self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, Self::Error> {
        Self::allowance_of(token, owner, spender)
    }

    fn safe_deposit(
        &mut self,
        weth: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        let call = IWeth::depositCall {};

        Self::call_optional_return_with_value(weth, &call.abi_encode(), value)
    }

    fn safe_withdraw(
        &mut self,
        weth: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        let call = IWeth::withdrawCall { value };

        Self::call_optional_return(weth, &call.abi_encode())
    }

    fn safe_withdraw_to(
        &mut self,
        weth: Address,
        value: U256,
        to: Address,
    ) -> Result<(), Self::Error> {
        self.safe_withdraw(weth, value)?;

        if to != contract::address() {
            call(Call::new_in(self).value(value), to, &[])
                .map_err(|_| SafeErc20FailedEthTransfer { receiver: to })?;
        }

        Ok(())
    }
}

impl SafeErc20 {
    /// Imitates a Stylus high-level call, relaxing the requirement on the
    /// return value: if data is returned, it must not be `false`, otherwise
    /// calls are assumed to be successful.
    ///
    /// # Arguments
    ///
    /// * `token` - Address of the ERC-20 token contract.
    /// * `call_data` - ABI-encoded payload of the call.
    ///
    /// # Errors
    ///
    /// * [`Error::SafeErc20FailedOperation`] - If the `token` address is not
    ///   a contract, the contract fails to execute the call or the call
    ///   returns value that is not `true`.
    fn call_optional_return(
        token: Address,
        call_data: &[u8],
    ) -> Result<(), Error> {
        Self::call_optional_return_with_value(token, call_data, U256::ZERO)
    }

    /// Same as [`Self::call_optional_return`], attaching `value` of native
    /// currency to the call.
    fn call_optional_return_with_value(
        token: Address,
        call_data: &[u8],
        value: U256,
    ) -> Result<(), Error> {
        if !Address::has_code(&token) {
            return Err(SafeErc20FailedOperation { token }.into());
        }

        match RawCall::new_with_value(value)
            .limit_return_data(0, WORD_BYTES)
            .call_with_reentrant_handling(token, call_data)
        {
            Ok(data) if ReturnDataKind::classify(&data).is_success() => Ok(()),
            _ => Err(SafeErc20FailedOperation { token }.into()),
        }
    }

    /// Performs a call to `token` whose return data must be exactly one
    /// word, decoded as an unsigned integer.
    ///
    /// # Arguments
    ///
    /// * `token` - Address of the ERC-20 token contract.
    /// * `call_data` - ABI-encoded payload of the call.
    ///
    /// # Errors
    ///
    /// * [`Error::SafeErc20FailedOperation`] - If the `token` address is not
    ///   a contract, the contract fails to execute the call or the returned
    ///   data is not exactly one word long.
    fn call_returning_word(
        token: Address,
        call_data: &[u8],
    ) -> Result<U256, Error> {
        if !Address::has_code(&token) {
            return Err(SafeErc20FailedOperation { token }.into());
        }

        let data = RawCall::new()
            .call_with_reentrant_handling(token, call_data)
            .map_err(|_| SafeErc20FailedOperation { token })?;

        if data.len() != WORD_BYTES {
            return Err(SafeErc20FailedOperation { token }.into());
        }

        Ok(U256::from_be_slice(&data))
    }

    /// Performs a call to `token`, discarding the outcome entirely.
    ///
    /// Failure tolerance is scoped to the permit path alone; every other
    /// operation classifies its outcome and surfaces failures.
    fn call_tolerating_failure(token: Address, call_data: &[u8]) {
        let _ = RawCall::new()
            .limit_return_data(0, WORD_BYTES)
            .call_with_reentrant_handling(token, call_data);
    }

    /// Reads the remaining number of `token` tokens that `spender` is
    /// allowed to spend on behalf of `owner`. Always a fresh external call.
    ///
    /// # Errors
    ///
    /// * [`Error::SafeErc20FailedOperation`] - If the `token` address is not
    ///   a contract, the contract fails to execute the call or the returned
    ///   data is not exactly one word long.
    fn allowance_of(
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, Error> {
        let call = IErc20::allowanceCall { owner, spender };

        Self::call_returning_word(token, &call.abi_encode())
    }
}
