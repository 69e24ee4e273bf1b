#![allow(clippy::must_use_candidate)]

//! Vocabulary shared by the check-in client and server
//!
//! Every server component speaks [`ApiError`] and [`HttpError`]; every failed
//! request leaves the server as a [`WireErrorResponse`]

mod context;
pub mod error;
mod wire;

pub use context::RequestContext;
pub use error::{ApiError, HttpError, codes};
pub use wire::WireErrorResponse;
