//! Caller-side retry with exponential backoff.
//!
//! The transport itself never retries. Callers that want resilience wrap an
//! operation in [`RetryPolicy::run`]; only transport failures are retried,
//! server-reported errors surface immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one. `1` disables retrying.
    pub max_attempts: u32,
    /// Delay before the first retry; doubles each retry.
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

impl RetryPolicy {
    /// Single attempt, no retries.
    pub const fn none() -> Self {
        Self {
            max_attempts: 1,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
        }
    }

    pub const fn with_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
        }
    }

    /// Delay after the `retry`-th failed attempt (zero-based).
    pub fn backoff_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry);
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }

    /// Run `op` until it succeeds, fails with a non-transport error, or the
    /// attempt budget is spent. The last error is returned.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let attempts = self.max_attempts.max(1);
        let mut retry = 0;
        loop {
            match op().await {
                Err(e) if e.is_transport() && retry + 1 < attempts => {
                    let delay = self.backoff_for(retry);
                    tracing::warn!(
                        attempt = retry + 1,
                        ?delay,
                        error = %e,
                        "service provider call failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    retry += 1;
                }
                other => return other,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceProviderError;
    use crate::types::ApiErrorObject;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            initial_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(4),
        }
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        let policy = RetryPolicy {
            max_attempts: 10,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_millis(500),
        };
        assert_eq!(policy.backoff_for(0), Duration::from_millis(100));
        assert_eq!(policy.backoff_for(1), Duration::from_millis(200));
        assert_eq!(policy.backoff_for(2), Duration::from_millis(400));
        assert_eq!(policy.backoff_for(3), Duration::from_millis(500));
        assert_eq!(policy.backoff_for(40), Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_transport_errors_are_retried() {
        let calls = AtomicU32::new(0);
        let result = fast(3)
            .run(|| {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n < 2 {
                        Err(ServiceProviderError::HttpError("connection refused".to_string()))
                    } else {
                        Ok(n)
                    }
                }
            })
            .await;
        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_budget() {
        let calls = AtomicU32::new(0);
        let result: Result<()> = fast(2)
            .run(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(ServiceProviderError::HttpError("timeout".to_string())) }
            })
            .await;
        assert!(result.unwrap_err().is_transport());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_api_errors_are_not_retried() {
        let calls = AtomicU32::new(0);
        let result: Result<()> = fast(5)
            .run(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async {
                    Err(ServiceProviderError::ApiError(ApiErrorObject::new(
                        "community not found",
                    )))
                }
            })
            .await;
        assert!(result.unwrap_err().api_error().is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_zero_attempts_still_runs_once() {
        let calls = AtomicU32::new(0);
        let result: Result<()> = fast(0)
            .run(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(ServiceProviderError::UnknownApiError) }
            })
            .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
