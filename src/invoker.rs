// Model Invoker - Remote completion dispatch with retry, backoff, and
// response normalization
//
// Owns the long-lived HTTP client. One invocation is one bounded sequence
// of attempts against the completion endpoint; the caller gets either the
// trimmed completion text or a typed failure.

use serde::Serialize;

use crate::config::{
    FailureClass, InvocationConfig, MAX_TOKENS_TO_SAMPLE, MODEL_ID, TEMPERATURE, TOP_P,
};
use crate::error::InvokeError;

/// Wire request for the completion service
#[derive(Serialize)]
struct InvokeRequest<'a> {
    prompt: &'a str,
    max_tokens_to_sample: u32,
    temperature: f32,
    top_p: f32,
}

/// Outcome of a single attempt, before retry policy is applied
enum AttemptError {
    /// Worth retrying: transport fault or throttling signal
    Retryable(FailureClass, String),
    /// Not worth retrying: the call completed but the result is unusable
    Fatal(InvokeError),
}

/// Client for the remote completion service
///
/// Constructed once per process and reused across sequential invocations;
/// all methods take `&self` and the configuration is read-only.
pub struct ModelInvoker {
    client: reqwest::Client,
    endpoint: String,
    config: InvocationConfig,
}

impl ModelInvoker {
    /// Create an invoker for the given service endpoint.
    ///
    /// The connect and read timeouts from `config` are baked into the HTTP
    /// client and apply to every attempt.
    pub fn new(
        endpoint: impl Into<String>,
        config: InvocationConfig,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.read_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            config,
        })
    }

    /// Send a prompt to the model and return the extracted completion.
    ///
    /// Transport faults and throttling responses are retried up to the
    /// configured attempt budget with growing delays; a completed response
    /// that is empty, unparseable, or missing the completion field fails
    /// immediately without retry.
    pub async fn invoke(&self, prompt: &str) -> Result<String, InvokeError> {
        let request = InvokeRequest {
            prompt,
            max_tokens_to_sample: MAX_TOKENS_TO_SAMPLE,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        };
        let payload = serde_json::to_string(&request)
            .map_err(|e| InvokeError::Malformed(format!("request serialization: {e}")))?;

        tracing::info!(prompt_len = prompt.len(), model = MODEL_ID, "sending prompt to model");
        tracing::debug!(%prompt, "outgoing prompt");
        tracing::debug!(body = %payload, "outgoing request body");

        let mut last_failure = String::new();

        for attempt in 1..=self.config.max_attempts.max(1) {
            match self.attempt(&payload).await {
                Ok(text) => {
                    tracing::info!(attempt, response_len = text.len(), "completion extracted");
                    tracing::debug!(%text, "extracted completion");
                    return Ok(text);
                }
                Err(AttemptError::Fatal(err)) => {
                    // Record how many attempts actually ran before giving up
                    let err = match err {
                        InvokeError::Transport { reason, .. } => InvokeError::Transport {
                            attempts: attempt,
                            reason,
                        },
                        other => other,
                    };
                    tracing::warn!(attempt, error = %err, "invocation failed");
                    return Err(err);
                }
                Err(AttemptError::Retryable(class, reason)) => {
                    tracing::warn!(attempt, ?class, %reason, "attempt failed");
                    last_failure = reason;

                    if attempt < self.config.max_attempts {
                        let delay = self.config.retry_delay(attempt, class);
                        tracing::debug!(attempt, delay_ms = delay.as_millis() as u64, "backing off");
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        Err(InvokeError::Transport {
            attempts: self.config.max_attempts.max(1),
            reason: last_failure,
        })
    }

    /// One network round trip: send, classify, parse, extract.
    async fn attempt(&self, payload: &str) -> Result<String, AttemptError> {
        let url = format!("{}/model/{}/invoke", self.endpoint, MODEL_ID);

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json")
            .body(payload.to_string())
            .send()
            .await
            .map_err(|e| AttemptError::Retryable(FailureClass::Transient, e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(AttemptError::Retryable(
                FailureClass::Throttle,
                format!("throttled: http {status}"),
            ));
        }
        if status.is_server_error() {
            return Err(AttemptError::Retryable(
                FailureClass::Transient,
                format!("http {status}"),
            ));
        }
        if !status.is_success() {
            // A client error will not succeed on retry
            return Err(AttemptError::Fatal(InvokeError::Transport {
                attempts: 1,
                reason: format!("http {status}"),
            }));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AttemptError::Retryable(FailureClass::Transient, e.to_string()))?;

        if body.is_empty() {
            return Err(AttemptError::Fatal(InvokeError::EmptyResponse));
        }

        tracing::debug!(body = %String::from_utf8_lossy(&body), "raw response body");

        let parsed: serde_json::Value = serde_json::from_slice(&body)
            .map_err(|e| AttemptError::Fatal(InvokeError::Malformed(e.to_string())))?;

        let completion = parsed
            .get("completion")
            .and_then(|v| v.as_str())
            .ok_or(AttemptError::Fatal(InvokeError::MissingField))?;

        Ok(completion.trim().to_string())
    }
}
