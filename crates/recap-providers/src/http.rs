//! Shared blocking HTTP client construction and retry policy.

use std::time::Duration;

use recap_core::config::ProviderConfig;
use reqwest::blocking::Client;
use tracing::debug;

/// Retries after the first attempt for transient failures.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Blocking client with the configured connect and request timeouts.
pub fn build_client(config: &ProviderConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(config.connect_timeout())
        .timeout(config.request_timeout())
        .build()
}

/// Run `attempt` up to `1 + max_retries` times with exponential backoff
/// (100ms, 200ms, ...). Only errors for which `retryable` holds are retried.
pub fn with_retries<T, E: std::fmt::Display>(
    max_retries: u32,
    retryable: impl Fn(&E) -> bool,
    mut attempt: impl FnMut() -> Result<T, E>,
) -> Result<T, E> {
    let mut tries = 0;
    loop {
        match attempt() {
            Ok(v) => return Ok(v),
            Err(e) if tries < max_retries && retryable(&e) => {
                tries += 1;
                let delay = Duration::from_millis(100 * 2u64.pow(tries - 1));
                debug!(attempt = tries, error = %e, "retrying provider request");
                std::thread::sleep(delay);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Whether an HTTP status is worth retrying (rate limits and server errors).
pub fn is_retryable_status(status: u16) -> bool {
    status == 429 || (500..600).contains(&status)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn stops_after_success() {
        let calls = Cell::new(0);
        let result: Result<u32, String> = with_retries(3, |_| true, || {
            calls.set(calls.get() + 1);
            if calls.get() < 2 {
                Err("flaky".to_string())
            } else {
                Ok(7)
            }
        });
        assert_eq!(result, Ok(7));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn non_retryable_errors_fail_fast() {
        let calls = Cell::new(0);
        let result: Result<(), String> = with_retries(3, |_| false, || {
            calls.set(calls.get() + 1);
            Err("bad request".to_string())
        });
        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn retryable_statuses() {
        assert!(is_retryable_status(429));
        assert!(is_retryable_status(503));
        assert!(!is_retryable_status(400));
        assert!(!is_retryable_status(401));
    }

    #[test]
    fn client_builds_from_default_config() {
        assert!(build_client(&ProviderConfig::default()).is_ok());
    }
}
