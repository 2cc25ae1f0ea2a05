/*!
# Safe Token Interactions for Stylus

Defensive wrappers for interacting with arbitrary, untrusted and possibly
non-compliant ERC-20 tokens, signature-based permits and wrapped-native
assets from [Arbitrum Stylus] contracts.

Token contracts in the wild disagree about how failure is signalled: some
return `false`, some return nothing at all, and some revert. The
[`SafeErc20`] helpers normalize every one of those behaviors into a single
revert-on-failure discipline, so the calling contract observes either a
completed operation or an ABI-encoded error.

[Arbitrum Stylus]: https://docs.arbitrum.io/stylus/stylus-gentle-introduction

## Usage

Add `safe-token-stylus` to your `Cargo.toml` and embed the helper in your
contract's storage:

```ignore
use safe_token_stylus::token::erc20::utils::{safe_erc20::ISafeErc20, SafeErc20};

#[entrypoint]
#[storage]
struct MyContract {
    safe_erc20: SafeErc20,
}
```

[`SafeErc20`]: token::erc20::utils::SafeErc20
*/

#![allow(clippy::pub_underscore_fields, clippy::module_name_repetitions)]
#![cfg_attr(not(feature = "std"), no_std, no_main)]
#![deny(rustdoc::broken_intra_doc_links)]
extern crate alloc;

pub mod token;
pub mod utils;

pub(crate) const WORD_BYTES: usize = 32;
