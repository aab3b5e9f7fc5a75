//! Provider parameter capabilities
//!
//! Each provider's options type declares the static set of parameters it
//! understands. The orchestration layer checks this descriptor before it
//! reads a parameter, instead of inferring support from an absent value.

use crate::error::{OptionsError, OptionsResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters that a chat options type may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionParameter {
    Model,
    Temperature,
    TopP,
    TopK,
    MaxTokens,
    FrequencyPenalty,
    PresencePenalty,
    StopSequences,
    SafePrompt,
    RandomSeed,
    ResponseFormat,
    Tools,
    ToolChoice,
    FunctionCallbacks,
    Functions,
    ProxyToolCalls,
    ToolContext,
}

impl OptionParameter {
    pub const ALL: [OptionParameter; 17] = [
        OptionParameter::Model,
        OptionParameter::Temperature,
        OptionParameter::TopP,
        OptionParameter::TopK,
        OptionParameter::MaxTokens,
        OptionParameter::FrequencyPenalty,
        OptionParameter::PresencePenalty,
        OptionParameter::StopSequences,
        OptionParameter::SafePrompt,
        OptionParameter::RandomSeed,
        OptionParameter::ResponseFormat,
        OptionParameter::Tools,
        OptionParameter::ToolChoice,
        OptionParameter::FunctionCallbacks,
        OptionParameter::Functions,
        OptionParameter::ProxyToolCalls,
        OptionParameter::ToolContext,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Temperature => "temperature",
            Self::TopP => "top_p",
            Self::TopK => "top_k",
            Self::MaxTokens => "max_tokens",
            Self::FrequencyPenalty => "frequency_penalty",
            Self::PresencePenalty => "presence_penalty",
            Self::StopSequences => "stop_sequences",
            Self::SafePrompt => "safe_prompt",
            Self::RandomSeed => "random_seed",
            Self::ResponseFormat => "response_format",
            Self::Tools => "tools",
            Self::ToolChoice => "tool_choice",
            Self::FunctionCallbacks => "function_callbacks",
            Self::Functions => "functions",
            Self::ProxyToolCalls => "proxy_tool_calls",
            Self::ToolContext => "tool_context",
        }
    }

    /// Whether the parameter is sent to the remote service.
    ///
    /// The function-calling parameters are consumed in process.
    pub fn is_wire_facing(&self) -> bool {
        !matches!(
            self,
            Self::FunctionCallbacks | Self::Functions | Self::ProxyToolCalls | Self::ToolContext
        )
    }
}

impl fmt::Display for OptionParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static set of parameters a provider supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterCapabilities {
    provider: &'static str,
    supported: &'static [OptionParameter],
}

impl ParameterCapabilities {
    pub const fn new(provider: &'static str, supported: &'static [OptionParameter]) -> Self {
        Self {
            provider,
            supported,
        }
    }

    pub fn provider(&self) -> &'static str {
        self.provider
    }

    pub fn supported(&self) -> &'static [OptionParameter] {
        self.supported
    }

    pub fn supports(&self, parameter: OptionParameter) -> bool {
        self.supported.contains(&parameter)
    }

    /// Parameters of the shared contract this provider does not support
    pub fn unsupported(&self) -> impl Iterator<Item = OptionParameter> + '_ {
        OptionParameter::ALL
            .into_iter()
            .filter(move |parameter| !self.supports(*parameter))
    }

    /// Fail with [`OptionsError::UnsupportedParameter`] unless `parameter` is supported
    pub fn check(&self, parameter: OptionParameter) -> OptionsResult<()> {
        if self.supports(parameter) {
            Ok(())
        } else {
            Err(OptionsError::UnsupportedParameter {
                provider: self.provider.to_string(),
                parameter: parameter.as_str().to_string(),
            })
        }
    }
}

/// Parameters understood by the Mistral chat API
pub static MISTRAL_CHAT_CAPABILITIES: ParameterCapabilities = ParameterCapabilities::new(
    "mistral",
    &[
        OptionParameter::Model,
        OptionParameter::Temperature,
        OptionParameter::TopP,
        OptionParameter::MaxTokens,
        OptionParameter::StopSequences,
        OptionParameter::SafePrompt,
        OptionParameter::RandomSeed,
        OptionParameter::ResponseFormat,
        OptionParameter::Tools,
        OptionParameter::ToolChoice,
        OptionParameter::FunctionCallbacks,
        OptionParameter::Functions,
        OptionParameter::ProxyToolCalls,
        OptionParameter::ToolContext,
    ],
);
