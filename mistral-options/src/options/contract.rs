//! Function-calling options contract shared by every provider's options type

use super::{ChatOptions, ToolContext};
use crate::capabilities::{ParameterCapabilities, MISTRAL_CHAT_CAPABILITIES};
use crate::function::FunctionCallbackHandle;
use std::collections::BTreeSet;

/// Accessors the client library reads from any provider's chat options.
///
/// Parameters a provider does not support keep the default `None`
/// implementation; [`FunctionCallingOptions::capabilities`] says which ones
/// those are.
pub trait FunctionCallingOptions {
    /// Parameters this options type supports
    fn capabilities(&self) -> &'static ParameterCapabilities;

    fn model(&self) -> Option<&str>;

    fn temperature(&self) -> Option<f64>;

    fn top_p(&self) -> Option<f64>;

    fn max_tokens(&self) -> Option<u32>;

    fn stop_sequences(&self) -> Option<&[String]>;

    fn frequency_penalty(&self) -> Option<f64> {
        None
    }

    fn presence_penalty(&self) -> Option<f64> {
        None
    }

    fn top_k(&self) -> Option<u32> {
        None
    }

    /// Callbacks enabled for the duration of the call
    fn function_callbacks(&self) -> &[FunctionCallbackHandle];

    /// Registry function names enabled for the call
    fn functions(&self) -> &BTreeSet<String>;

    fn proxy_tool_calls(&self) -> Option<bool>;

    fn tool_context(&self) -> Option<&ToolContext>;

    /// Independent copy of the options
    fn copy(&self) -> Self
    where
        Self: Sized;
}

impl FunctionCallingOptions for ChatOptions {
    fn capabilities(&self) -> &'static ParameterCapabilities {
        &MISTRAL_CHAT_CAPABILITIES
    }

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    fn top_p(&self) -> Option<f64> {
        self.top_p
    }

    fn max_tokens(&self) -> Option<u32> {
        self.max_tokens
    }

    fn stop_sequences(&self) -> Option<&[String]> {
        self.stop.as_deref()
    }

    fn function_callbacks(&self) -> &[FunctionCallbackHandle] {
        &self.function_callbacks
    }

    fn functions(&self) -> &BTreeSet<String> {
        &self.functions
    }

    fn proxy_tool_calls(&self) -> Option<bool> {
        self.proxy_tool_calls
    }

    fn tool_context(&self) -> Option<&ToolContext> {
        self.tool_context.as_ref()
    }

    fn copy(&self) -> Self {
        ChatOptions::from_options(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::OptionParameter;

    fn describe(options: &dyn FunctionCallingOptions) -> (Option<String>, bool) {
        let top_k_supported = options.capabilities().supports(OptionParameter::TopK);
        (options.model().map(str::to_string), top_k_supported)
    }

    #[test]
    fn test_usable_as_trait_object() {
        let options = ChatOptions::builder().model("mistral-large-latest").build();
        assert_eq!(
            describe(&options),
            (Some("mistral-large-latest".to_string()), false)
        );
    }

    #[test]
    fn test_unsupported_parameters_are_absent() {
        let options = ChatOptions::builder()
            .temperature(0.5)
            .top_p(0.9)
            .max_tokens(10)
            .build();
        assert_eq!(options.frequency_penalty(), None);
        assert_eq!(options.presence_penalty(), None);
        assert_eq!(options.top_k(), None);
    }

    #[test]
    fn test_contract_copy_matches_inherent_copy() {
        let options = ChatOptions::builder().model("m").proxy_tool_calls(true).build();
        let copied = <ChatOptions as FunctionCallingOptions>::copy(&options);
        assert_eq!(copied, options.copy());
    }
}
