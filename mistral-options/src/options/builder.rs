//! Fluent construction of [`ChatOptions`]

use super::{ChatOptions, ToolContext};
use crate::error::{OptionsError, OptionsResult};
use crate::function::FunctionCallbackHandle;
use crate::protocol::{FunctionTool, ResponseFormat, ToolChoice};
use serde_json::Value;
use tracing::trace;

/// Builder for [`ChatOptions`].
///
/// `build` consumes the builder, so two built instances can never share
/// state through a reused builder. Cloning a builder clones everything it
/// has accumulated.
#[derive(Debug, Clone, Default)]
pub struct ChatOptionsBuilder {
    options: ChatOptions,
}

impl ChatOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a builder with the values of `source`
    pub fn from_options(source: &ChatOptions) -> Self {
        Self {
            options: source.clone(),
        }
    }

    /// Model identifier, either a raw id or a [`crate::MistralChatModel`]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.options.model = Some(model.into());
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.options.max_tokens = Some(max_tokens);
        self
    }

    pub fn safe_prompt(mut self, safe_prompt: bool) -> Self {
        self.options.safe_prompt = Some(safe_prompt);
        self
    }

    pub fn random_seed(mut self, random_seed: u64) -> Self {
        self.options.random_seed = Some(random_seed);
        self
    }

    /// Replace the stop sequences
    pub fn stop<I, S>(mut self, stop: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.stop = Some(stop.into_iter().map(Into::into).collect());
        self
    }

    /// Append a single stop sequence
    pub fn stop_sequence(mut self, stop: impl Into<String>) -> Self {
        self.options
            .stop
            .get_or_insert_with(Vec::new)
            .push(stop.into());
        self
    }

    /// Sampling temperature. The range is checked by the API, not here.
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.options.temperature = Some(temperature);
        self
    }

    pub fn top_p(mut self, top_p: f64) -> Self {
        self.options.top_p = Some(top_p);
        self
    }

    pub fn response_format(mut self, response_format: ResponseFormat) -> Self {
        self.options.response_format = Some(response_format);
        self
    }

    pub fn tools<I>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = FunctionTool>,
    {
        self.options.tools = Some(tools.into_iter().collect());
        self
    }

    pub fn tool_choice(mut self, tool_choice: ToolChoice) -> Self {
        self.options.tool_choice = Some(tool_choice);
        self
    }

    /// Replace the callbacks enabled for the call
    pub fn function_callbacks<I>(mut self, callbacks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FunctionCallbackHandle>,
    {
        self.options.function_callbacks = callbacks.into_iter().map(Into::into).collect();
        self
    }

    /// Add one callback to those enabled for the call
    pub fn function_callback(mut self, callback: impl Into<FunctionCallbackHandle>) -> Self {
        self.options.function_callbacks.push(callback.into());
        self
    }

    /// Replace the set of enabled registry function names
    pub fn functions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.functions = names.into_iter().map(Into::into).collect();
        self
    }

    /// Enable one registry function by name. Adding a name twice is a no-op.
    pub fn function(mut self, name: impl Into<String>) -> OptionsResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(OptionsError::invalid_argument(
                "Function name must not be empty",
            ));
        }
        self.options.functions.insert(name);
        Ok(self)
    }

    pub fn proxy_tool_calls(mut self, proxy_tool_calls: bool) -> Self {
        self.options.proxy_tool_calls = Some(proxy_tool_calls);
        self
    }

    /// Merge entries into the tool context. Keys already present are overwritten.
    pub fn tool_context<I, K>(mut self, tool_context: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let context = self
            .options
            .tool_context
            .get_or_insert_with(ToolContext::new);
        for (key, value) in tool_context {
            let key = key.into();
            if context.contains_key(&key) {
                trace!(key = %key, "overwriting tool context entry");
            }
            context.insert(key, value);
        }
        self
    }

    pub fn build(self) -> ChatOptions {
        self.options
    }
}
