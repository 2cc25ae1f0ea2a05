//! Common Smart Contracts utilities.
pub mod reentrant_call_handler;

pub use reentrant_call_handler::ReentrantCallHandler;
