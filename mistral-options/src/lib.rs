//! Mistral Options Library
//!
//! This crate provides the typed chat-completion options for the Mistral AI
//! chat API: sampling controls, stop conditions, response-format constraints
//! and the function-calling configuration shared with other providers.

pub mod capabilities;
pub mod config;
pub mod error;
pub mod function;
pub mod options;
pub mod protocol;

pub use capabilities::{OptionParameter, ParameterCapabilities, MISTRAL_CHAT_CAPABILITIES};
pub use error::{OptionsError, OptionsResult};
pub use function::{
    resolve_function_callbacks, FunctionCallback, FunctionCallbackHandle, FunctionRegistry,
    InMemoryFunctionRegistry,
};
pub use options::{ChatOptions, ChatOptionsBuilder, FunctionCallingOptions, ToolContext};
pub use protocol::{
    FunctionDefinition, FunctionTool, JsonSchemaFormat, MistralChatModel, ResponseFormat,
    ToolChoice, ToolChoiceMode, ToolType,
};

/// Returns the version of the Mistral Options library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
