//! User-facing descriptions of client failures
//!
//! Both functions are total: they accept any error (or any value at all via
//! [`describe_any`]) and never panic.

use std::any::Any;
use std::error::Error;
use std::io;

use crate::ClientError;

/// Shown when the server could not be reached
pub const CONNECTIVITY_MESSAGE: &str = "Unable to reach the server. Please check your connection and try again.";

/// Shown when nothing more specific is known
pub const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

/// Whether `err`, or anything in its source chain, is a failure that never
/// produced a server response
///
/// Uses the same criterion as the retry executor.
pub fn is_transport_failure(err: &(dyn Error + 'static)) -> bool {
    let mut current = Some(err);

    while let Some(error) = current {
        if is_transport_error(error) {
            return true;
        }
        current = error.source();
    }

    false
}

fn is_transport_error(error: &(dyn Error + 'static)) -> bool {
    if let Some(client) = error.downcast_ref::<ClientError>() {
        return client.is_transport();
    }

    if let Some(http) = error.downcast_ref::<reqwest::Error>() {
        if http.is_builder() {
            return false;
        }
        return http.is_connect() || http.is_timeout() || http.is_body() || (http.is_request() && http.status().is_none());
    }

    if let Some(io) = error.downcast_ref::<io::Error>() {
        return matches!(
            io.kind(),
            io::ErrorKind::ConnectionRefused
                | io::ErrorKind::ConnectionReset
                | io::ErrorKind::ConnectionAborted
                | io::ErrorKind::NotConnected
                | io::ErrorKind::BrokenPipe
                | io::ErrorKind::TimedOut
                | io::ErrorKind::UnexpectedEof
        );
    }

    false
}

/// Stable user-facing message for an error
pub fn describe(err: &(dyn Error + 'static)) -> String {
    if is_transport_failure(err) {
        return CONNECTIVITY_MESSAGE.to_owned();
    }

    let message = err.to_string();
    if message.trim().is_empty() {
        GENERIC_MESSAGE.to_owned()
    } else {
        message
    }
}

/// Stable user-facing message for an arbitrary value
///
/// Covers values that are not errors at all, such as panic payloads, unit,
/// `None`, or plain strings. Only recognised error types get a specific
/// message; everything else gets [`GENERIC_MESSAGE`].
pub fn describe_any(value: &dyn Any) -> String {
    if let Some(err) = value.downcast_ref::<ClientError>() {
        return describe(err);
    }

    if let Some(err) = value.downcast_ref::<reqwest::Error>() {
        return describe(err);
    }

    if let Some(err) = value.downcast_ref::<io::Error>() {
        return describe(err);
    }

    if let Some(err) = value.downcast_ref::<Box<dyn Error + Send + Sync>>() {
        return describe(err.as_ref());
    }

    GENERIC_MESSAGE.to_owned()
}
