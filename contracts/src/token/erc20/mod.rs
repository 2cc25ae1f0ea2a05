//! Helpers for interacting with contracts implementing the ERC-20 token
//! standard, compliant or not.
pub mod utils;
