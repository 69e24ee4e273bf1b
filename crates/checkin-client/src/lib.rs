#![allow(clippy::must_use_candidate)]

//! Typed HTTP client for the check-in service
//!
//! Every call runs through a per-attempt timeout and an exponential-backoff
//! retry loop that only retries failures where no response arrived. Received
//! error responses surface as [`ClientError::Api`] and can be turned into a
//! user-facing message with [`classify::describe`].

pub mod classify;
mod client;
pub mod error;
mod retry;
mod timeout;
pub mod types;

pub use client::CheckinClient;
pub use error::{ClientError, Result};
pub use retry::RetryPolicy;
pub use timeout::with_timeout;
pub use types::*;
