// Compose Engine - AI-assisted text editing core
//
// Turns a (message, feature, detail) edit request into a prompt for a
// remote completion service and normalizes the response into a single
// textual result. The interactive surface and logging setup live in the
// host application.

pub mod composer;
pub mod config;
pub mod error;
pub mod invoker;
pub mod prompts;
pub mod types;

// Re-export the types callers need for a round trip
pub use composer::{is_error_result, Composer, ERROR_MARKER};
pub use config::{BackoffMode, InvocationConfig, MODEL_ID};
pub use error::InvokeError;
pub use invoker::ModelInvoker;
pub use prompts::build_prompt;
pub use types::{EditRequest, Feature, ToneStyle};
