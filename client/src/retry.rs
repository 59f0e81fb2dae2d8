//! Retry policy for idempotent requests with exponential backoff.
//!
//! # Retry Policy
//!
//! - Max retries: 2 (3 total attempts)
//! - Initial delay: 500ms
//! - Max delay: 8 seconds
//! - Jitter: down-jitter up to 25% (multiplier in [0.75, 1.0])
//!
//! # Retryable Conditions
//!
//! - HTTP 408, 429, 5xx
//! - Connection and timeout errors
//!
//! A valid `Retry-After` header on the response takes precedence over the
//! computed backoff.

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use std::time::Duration;

/// Retry configuration.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries (not counting the initial request).
    pub max_retries: u32,
    /// Initial backoff delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum backoff delay.
    pub max_delay: Duration,
    /// Jitter factor for down-jitter (0.25 = up to 25% reduction).
    pub jitter_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
            jitter_factor: 0.25,
        }
    }
}

/// Parse a `Retry-After` header.
///
/// Returns `Some(duration)` for a valid delay-seconds value with
/// `0 < duration < 60s`. HTTP-date values, missing or out-of-range headers
/// return `None`.
#[must_use]
pub fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    let value = headers.get("retry-after")?;
    let secs = value.to_str().ok()?.parse::<u64>().ok()?;
    let duration = Duration::from_secs(secs);
    (duration > Duration::ZERO && duration < Duration::from_secs(60)).then_some(duration)
}

/// Determine if a response status is retryable.
#[must_use]
pub fn is_retryable_status(status: StatusCode) -> bool {
    matches!(status.as_u16(), 408 | 429 | 500 | 502 | 503 | 504 | 520..=599)
}

/// Calculate the delay before the next retry.
///
/// `backoff_step` is 0 before the first retry, 1 before the second, etc.
/// A valid `Retry-After` header takes precedence over the computed backoff.
#[must_use]
pub fn backoff_delay(
    backoff_step: u32,
    config: &RetryConfig,
    headers: Option<&HeaderMap>,
) -> Duration {
    if let Some(headers) = headers
        && let Some(delay) = parse_retry_after(headers)
    {
        return delay;
    }

    // Exponential backoff: initial_delay * 2^backoff_step, capped
    let base = config.initial_delay.as_secs_f64() * 2.0_f64.powi(backoff_step as i32);
    let capped = base.min(config.max_delay.as_secs_f64());

    // Down-jitter: multiply by a random factor in [1 - jitter_factor, 1.0]
    let jitter = 1.0 - rand::random::<f64>() * config.jitter_factor;
    Duration::from_secs_f64(capped * jitter)
}

#[cfg(test)]
mod tests {
    use super::{RetryConfig, backoff_delay, is_retryable_status, parse_retry_after};
    use reqwest::StatusCode;
    use reqwest::header::{HeaderMap, HeaderValue};
    use std::time::Duration;

    fn headers_with_retry_after(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn retryable_status_table() {
        assert!(is_retryable_status(StatusCode::REQUEST_TIMEOUT));
        assert!(is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(is_retryable_status(StatusCode::SERVICE_UNAVAILABLE));

        assert!(!is_retryable_status(StatusCode::BAD_REQUEST));
        assert!(!is_retryable_status(StatusCode::UNAUTHORIZED));
        assert!(!is_retryable_status(StatusCode::NOT_FOUND));
        assert!(!is_retryable_status(StatusCode::UNPROCESSABLE_ENTITY));
    }

    #[test]
    fn retry_after_parsing() {
        let valid = headers_with_retry_after("5");
        assert_eq!(parse_retry_after(&valid), Some(Duration::from_secs(5)));
        // Zero and out-of-range values are ignored
        assert_eq!(parse_retry_after(&headers_with_retry_after("0")), None);
        assert_eq!(parse_retry_after(&headers_with_retry_after("3600")), None);
        // HTTP-date form is ignored
        let dated = headers_with_retry_after("Wed, 21 Oct 2015 07:28:00 GMT");
        assert_eq!(parse_retry_after(&dated), None);
        assert_eq!(parse_retry_after(&HeaderMap::new()), None);
    }

    #[test]
    fn backoff_grows_and_caps() {
        let config = RetryConfig {
            jitter_factor: 0.0,
            ..Default::default()
        };
        assert_eq!(backoff_delay(0, &config, None), Duration::from_millis(500));
        assert_eq!(backoff_delay(1, &config, None), Duration::from_secs(1));
        assert_eq!(backoff_delay(2, &config, None), Duration::from_secs(2));
        // Capped at max_delay
        assert_eq!(backoff_delay(10, &config, None), Duration::from_secs(8));
    }

    #[test]
    fn jitter_stays_within_bounds() {
        let config = RetryConfig::default();
        for _ in 0..100 {
            let delay = backoff_delay(1, &config, None);
            assert!(delay <= Duration::from_secs(1));
            assert!(delay >= Duration::from_millis(750));
        }
    }

    #[test]
    fn retry_after_takes_precedence() {
        let config = RetryConfig::default();
        let headers = headers_with_retry_after("3");
        assert_eq!(backoff_delay(0, &config, Some(&headers)), Duration::from_secs(3));
    }
}
