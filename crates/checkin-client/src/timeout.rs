use std::future::Future;
use std::time::Duration;

use crate::error::{ClientError, Result};

/// Run one attempt under a deadline
///
/// The deadline timer lives inside this call and is dropped on every exit
/// path; an attempt that overruns is cancelled by dropping its future.
pub async fn with_timeout<F, T>(deadline: Duration, attempt: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(deadline, attempt).await {
        Ok(result) => result,
        Err(_elapsed) => Err(ClientError::Timeout(deadline)),
    }
}
