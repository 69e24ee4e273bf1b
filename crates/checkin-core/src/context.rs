use std::time::{Duration, Instant};

use http::Method;

/// Per-request facts captured once on entry
///
/// Read-only after creation; handlers can pull it from request extensions.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// HTTP method
    pub method: Method,
    /// Requested path including query string
    pub path: String,
    /// Best-effort client address (`unknown` when it cannot be determined)
    pub client_address: String,
    /// When the request entered the server
    pub started_at: Instant,
}

impl RequestContext {
    pub fn new(method: Method, path: impl Into<String>, client_address: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            client_address: client_address.into(),
            started_at: Instant::now(),
        }
    }

    /// Time since the request entered the server
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Elapsed time in whole milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_context_starts_now() {
        let ctx = RequestContext::new(Method::POST, "/api/checkin", "127.0.0.1");
        assert_eq!(ctx.method, Method::POST);
        assert_eq!(ctx.path, "/api/checkin");
        assert!(ctx.elapsed() < Duration::from_secs(5));
    }
}
