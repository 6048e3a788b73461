// Invocation Configuration - Model constants and retry/backoff policy
//
// Generation parameters are fixed for this deployment; only the transport
// policy (timeouts, attempt budget, backoff mode) is configurable.

use std::time::Duration;

/// Fixed identifier of the hosted model version
pub const MODEL_ID: &str = "anthropic.claude-v2";

/// Maximum tokens the model may generate per completion
pub const MAX_TOKENS_TO_SAMPLE: u32 = 500;

/// Sampling temperature
pub const TEMPERATURE: f32 = 0.7;

/// Nucleus sampling threshold
pub const TOP_P: f32 = 0.9;

/// How retry delays grow across attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackoffMode {
    /// Plain exponential backoff regardless of failure class
    Standard,
    /// Exponential backoff that waits longer after throttling signals
    #[default]
    Adaptive,
}

/// Classification of a failed attempt, used by adaptive backoff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Connection error, timeout, or server-side fault
    Transient,
    /// The service signalled rate limiting
    Throttle,
}

/// Transport policy shared read-only by all invocations
#[derive(Debug, Clone)]
pub struct InvocationConfig {
    /// Timeout for establishing the connection, per attempt
    pub connect_timeout: Duration,
    /// Timeout for receiving the response, per attempt
    pub read_timeout: Duration,
    /// Total attempt budget (first try plus retries)
    pub max_attempts: u32,
    /// Delay growth strategy between attempts
    pub backoff: BackoffMode,
    /// Delay before the first retry; doubles per subsequent attempt
    pub backoff_base: Duration,
    /// Upper bound on any single retry delay
    pub backoff_cap: Duration,
}

impl Default for InvocationConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(60),
            read_timeout: Duration::from_secs(60),
            max_attempts: 10,
            backoff: BackoffMode::Adaptive,
            backoff_base: Duration::from_millis(500),
            backoff_cap: Duration::from_secs(20),
        }
    }
}

impl InvocationConfig {
    /// Delay to wait before retry number `attempt` (1-based: the first
    /// retry is attempt 1). Grows exponentially and is capped; under
    /// `Adaptive`, throttling failures wait twice as long as transient
    /// ones at the same attempt.
    pub fn retry_delay(&self, attempt: u32, class: FailureClass) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        let mut delay = self.backoff_base.saturating_mul(1 << exponent);

        if self.backoff == BackoffMode::Adaptive && class == FailureClass::Throttle {
            delay = delay.saturating_mul(2);
        }

        delay.min(self.backoff_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> InvocationConfig {
        InvocationConfig {
            backoff_base: Duration::from_millis(100),
            backoff_cap: Duration::from_secs(5),
            ..InvocationConfig::default()
        }
    }

    #[test]
    fn test_defaults_match_deployment() {
        let config = InvocationConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_secs(60));
        assert_eq!(config.read_timeout, Duration::from_secs(60));
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.backoff, BackoffMode::Adaptive);
    }

    #[test]
    fn test_retry_delay_grows() {
        let config = test_config();
        let d1 = config.retry_delay(1, FailureClass::Transient);
        let d2 = config.retry_delay(2, FailureClass::Transient);
        let d3 = config.retry_delay(3, FailureClass::Transient);

        assert_eq!(d1, Duration::from_millis(100));
        assert_eq!(d2, Duration::from_millis(200));
        assert_eq!(d3, Duration::from_millis(400));
    }

    #[test]
    fn test_retry_delay_capped() {
        let config = test_config();
        let late = config.retry_delay(30, FailureClass::Transient);
        assert_eq!(late, Duration::from_secs(5));
    }

    #[test]
    fn test_adaptive_throttle_waits_longer() {
        let config = test_config();
        let transient = config.retry_delay(2, FailureClass::Transient);
        let throttled = config.retry_delay(2, FailureClass::Throttle);
        assert!(throttled > transient);
        assert_eq!(throttled, transient * 2);
    }

    #[test]
    fn test_standard_mode_ignores_class() {
        let config = InvocationConfig {
            backoff: BackoffMode::Standard,
            ..test_config()
        };
        assert_eq!(
            config.retry_delay(2, FailureClass::Throttle),
            config.retry_delay(2, FailureClass::Transient)
        );
    }
}
