// Invocation Errors - Failure taxonomy for the remote completion call
//
// All variants collapse into a single display string at the composer
// boundary; tests and diagnostics see the distinct causes.

use thiserror::Error;

/// Failure of a single `EditRequest` round trip
#[derive(Debug, Error)]
pub enum InvokeError {
    /// Connection, timeout, or HTTP-level failure after the retry budget
    /// was exhausted.
    #[error("transport failure after {attempts} attempt(s): {reason}")]
    Transport { attempts: u32, reason: String },

    /// The call completed but the response carried no body.
    #[error("service returned an empty response body")]
    EmptyResponse,

    /// A body was present but could not be parsed as JSON.
    #[error("malformed response body: {0}")]
    Malformed(String),

    /// The parsed body lacks a string-typed `completion` field.
    #[error("response is missing the completion field")]
    MissingField,
}
