// Composer - Caller-facing entry point for edit requests
//
// Wires prompt construction to model invocation and collapses every
// failure into a single display-ready string. Callers branch on the
// "Error:" prefix without inspecting structured error data.

use crate::config::InvocationConfig;
use crate::invoker::ModelInvoker;
use crate::prompts::build_prompt;
use crate::types::EditRequest;

/// Prefix callers use to recognize a failed request
pub const ERROR_MARKER: &str = "Error:";

/// Display string returned for any failure kind
const ERROR_MESSAGE: &str = "Error: Could not process the message.";

/// Facade over the prompt builder and model invoker
pub struct Composer {
    invoker: ModelInvoker,
}

impl Composer {
    /// Create a composer talking to the given completion service endpoint.
    pub fn new(
        endpoint: impl Into<String>,
        config: InvocationConfig,
    ) -> Result<Self, reqwest::Error> {
        let invoker = ModelInvoker::new(endpoint, config)?;
        Ok(Self { invoker })
    }

    /// Run one edit request end to end and return display-ready text.
    ///
    /// On success this is the model's trimmed completion; on any failure it
    /// is a fixed message beginning with [`ERROR_MARKER`]. The underlying
    /// failure kind is recorded in the diagnostics, not surfaced here.
    pub async fn apply(&self, request: &EditRequest) -> String {
        let prompt = build_prompt(&request.message, request.feature, &request.detail);

        match self.invoker.invoke(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(
                    feature = request.feature.as_str(),
                    error = %err,
                    "edit request failed"
                );
                ERROR_MESSAGE.to_string()
            }
        }
    }
}

/// Check whether a result string from [`Composer::apply`] is a failure.
pub fn is_error_result(result: &str) -> bool {
    result.starts_with(ERROR_MARKER)
}
