use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Exponential backoff policy for establishing store connections
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    /// Upper bound for a single wait
    pub max_delay_ms: u64,
    pub backoff_multiplier: f64,
    /// Scale each wait into the 50%..100% range
    pub use_jitter: bool,
}

impl RetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Policy used while a service boots and its store may still be starting.
    ///
    /// Five retries starting at 500ms, capped at 10s.
    pub fn startup() -> Self {
        Self {
            max_retries: 5,
            initial_delay_ms: 500,
            max_delay_ms: 10_000,
            ..Self::default()
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_max_delay(mut self, delay_ms: u64) -> Self {
        self.max_delay_ms = delay_ms;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }

    /// Un-jittered wait before retry number `retry` (1-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1) as i32;
        let raw = self.initial_delay_ms as f64 * self.backoff_multiplier.powi(exponent);
        let capped = raw.min(self.max_delay_ms as f64) as u64;
        Duration::from_millis(capped)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

/// Run `operation` until it succeeds or the policy is exhausted.
///
/// The last error is returned once `max_retries` retries have failed.
///
/// ```ignore
/// use database::common::{retry_with_backoff, RetryConfig};
///
/// let client = retry_with_backoff(
///     || database::mongodb::connect_from_config(&config),
///     RetryConfig::startup(),
/// )
/// .await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut retries = 0;

    loop {
        let err = match operation().await {
            Ok(value) => {
                if retries > 0 {
                    debug!(retries, "Operation succeeded after retrying");
                }
                return Ok(value);
            }
            Err(err) => err,
        };

        if retries >= config.max_retries {
            warn!(attempts = retries + 1, error = %err, "Giving up after repeated failures");
            return Err(err);
        }
        retries += 1;

        let mut wait = config.delay_for(retries);
        if config.use_jitter {
            wait = apply_jitter(wait);
        }

        debug!(
            retry = retries,
            max_retries = config.max_retries,
            wait_ms = wait.as_millis() as u64,
            error = %err,
            "Operation failed, retrying"
        );
        tokio::time::sleep(wait).await;
    }
}

/// Scale a wait to 50%..100% of its length.
fn apply_jitter(wait: Duration) -> Duration {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let seed = RandomState::new().hash_one(std::time::SystemTime::now());
    let factor = 0.5 + (seed % 51) as f64 / 100.0;
    wait.mul_f64(factor)
}

/// [`retry_with_backoff`] with the default policy.
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}
