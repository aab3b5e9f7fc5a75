//! Chat options for a single Mistral chat completion call
//!
//! [`ChatOptions`] is an immutable record. It is assembled through
//! [`ChatOptionsBuilder`], and derived per call from a set of defaults with
//! [`ChatOptions::to_builder`] or [`ChatOptions::copy`]. Every collection it
//! holds is owned, so a copy never shares mutable state with its source. The
//! only shared objects are the function callbacks themselves, which belong to
//! the caller.
//!
//! Serialization covers the wire-facing fields only and omits absent ones.
//! The function-calling fields (`function_callbacks`, `functions`,
//! `proxy_tool_calls`, `tool_context`) stay in process.

mod builder;
mod contract;
mod equality;

pub use builder::ChatOptionsBuilder;
pub use contract::FunctionCallingOptions;

use crate::function::FunctionCallbackHandle;
use crate::protocol::{FunctionTool, ResponseFormat, ToolChoice};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Side-channel data handed to callbacks when they execute
pub type ToolContext = BTreeMap<String, Value>;

/// Options for the Mistral AI chat API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatOptions {
    /// ID of the model to use
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,

    /// Sampling temperature. Higher values make the output more random.
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,

    /// Nucleus sampling probability mass
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,

    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,

    /// Inject a safety prompt before all conversations
    #[serde(skip_serializing_if = "Option::is_none")]
    safe_prompt: Option<bool>,

    /// Seed for deterministic sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    random_seed: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,

    /// Generation stops when any of these is produced
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<Vec<String>>,

    /// Functions the model may generate JSON inputs for
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<FunctionTool>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<ToolChoice>,

    /// Callbacks enabled for the duration of the call
    #[serde(skip)]
    function_callbacks: Vec<FunctionCallbackHandle>,

    /// Names of registry callbacks enabled for the call
    #[serde(skip)]
    functions: BTreeSet<String>,

    /// Return tool calls to the caller instead of executing them
    #[serde(skip)]
    proxy_tool_calls: Option<bool>,

    #[serde(skip)]
    tool_context: Option<ToolContext>,
}

impl ChatOptions {
    /// Start building a new set of options
    pub fn builder() -> ChatOptionsBuilder {
        ChatOptionsBuilder::new()
    }

    /// Build an independent instance holding the same values as `source`
    pub fn from_options(source: &ChatOptions) -> Self {
        ChatOptionsBuilder::from_options(source).build()
    }

    /// Independent copy of these options
    pub fn copy(&self) -> Self {
        Self::from_options(self)
    }

    /// Builder seeded with these options, for per-call overrides
    pub fn to_builder(&self) -> ChatOptionsBuilder {
        ChatOptionsBuilder::from_options(self)
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    pub fn top_p(&self) -> Option<f64> {
        self.top_p
    }

    pub fn max_tokens(&self) -> Option<u32> {
        self.max_tokens
    }

    pub fn safe_prompt(&self) -> Option<bool> {
        self.safe_prompt
    }

    pub fn random_seed(&self) -> Option<u64> {
        self.random_seed
    }

    pub fn response_format(&self) -> Option<&ResponseFormat> {
        self.response_format.as_ref()
    }

    /// Stop sequences under the provider's own name
    pub fn stop(&self) -> Option<&[String]> {
        self.stop.as_deref()
    }

    /// Stop sequences under the cross-provider name. Always equal to [`Self::stop`].
    pub fn stop_sequences(&self) -> Option<&[String]> {
        self.stop()
    }

    pub fn tools(&self) -> Option<&[FunctionTool]> {
        self.tools.as_deref()
    }

    pub fn tool_choice(&self) -> Option<&ToolChoice> {
        self.tool_choice.as_ref()
    }

    pub fn function_callbacks(&self) -> &[FunctionCallbackHandle] {
        &self.function_callbacks
    }

    pub fn functions(&self) -> &BTreeSet<String> {
        &self.functions
    }

    pub fn proxy_tool_calls(&self) -> Option<bool> {
        self.proxy_tool_calls
    }

    pub fn tool_context(&self) -> Option<&ToolContext> {
        self.tool_context.as_ref()
    }

    /// Wire-facing JSON form of these options
    pub fn to_wire_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
