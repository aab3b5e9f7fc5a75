//! Wire types referenced by the chat options
//!
//! These mirror the Mistral AI chat completion request schema for the parts
//! the options carry: the model identifier, the response format, the tool
//! definitions and the tool choice policy.

use crate::error::OptionsError;
use crate::protocol::hashing::hash_json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Named Mistral chat models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MistralChatModel {
    #[serde(rename = "open-mistral-7b")]
    OpenMistral7b,
    #[serde(rename = "open-mixtral-8x7b")]
    OpenMixtral8x7b,
    #[serde(rename = "open-mixtral-8x22b")]
    OpenMixtral8x22b,
    #[serde(rename = "mistral-small-latest")]
    Small,
    #[serde(rename = "mistral-medium-latest")]
    Medium,
    #[serde(rename = "mistral-large-latest")]
    Large,
    #[serde(rename = "codestral-latest")]
    Codestral,
    #[serde(rename = "pixtral-12b-2409")]
    Pixtral,
    #[serde(rename = "pixtral-large-latest")]
    PixtralLarge,
}

impl MistralChatModel {
    /// Every known chat model
    pub const ALL: [MistralChatModel; 9] = [
        MistralChatModel::OpenMistral7b,
        MistralChatModel::OpenMixtral8x7b,
        MistralChatModel::OpenMixtral8x22b,
        MistralChatModel::Small,
        MistralChatModel::Medium,
        MistralChatModel::Large,
        MistralChatModel::Codestral,
        MistralChatModel::Pixtral,
        MistralChatModel::PixtralLarge,
    ];

    /// Identifier sent to the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenMistral7b => "open-mistral-7b",
            Self::OpenMixtral8x7b => "open-mixtral-8x7b",
            Self::OpenMixtral8x22b => "open-mixtral-8x22b",
            Self::Small => "mistral-small-latest",
            Self::Medium => "mistral-medium-latest",
            Self::Large => "mistral-large-latest",
            Self::Codestral => "codestral-latest",
            Self::Pixtral => "pixtral-12b-2409",
            Self::PixtralLarge => "pixtral-large-latest",
        }
    }
}

impl fmt::Display for MistralChatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MistralChatModel {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| OptionsError::UnknownModel(s.to_string()))
    }
}

impl From<MistralChatModel> for String {
    fn from(model: MistralChatModel) -> Self {
        model.as_str().to_string()
    }
}

/// Shape the model must give its output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Free text
    Text,
    /// JSON mode: the message is guaranteed to be valid JSON
    JsonObject,
    /// JSON constrained by a schema
    JsonSchema { json_schema: JsonSchemaFormat },
}

impl ResponseFormat {
    /// JSON output constrained by `schema`
    pub fn json_schema(name: impl Into<String>, schema: Value) -> Self {
        ResponseFormat::JsonSchema {
            json_schema: JsonSchemaFormat {
                name: name.into(),
                description: None,
                schema,
                strict: None,
            },
        }
    }
}

impl Hash for ResponseFormat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        if let ResponseFormat::JsonSchema { json_schema } = self {
            json_schema.hash(state);
        }
    }
}

/// Named JSON schema for structured output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSchemaFormat {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub schema: Value,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

impl Hash for JsonSchemaFormat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.description.hash(state);
        hash_json(&self.schema, state);
        self.strict.hash(state);
    }
}

/// Kind of tool offered to the model. Only functions exist today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    #[default]
    Function,
}

/// Tool definition for function calling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionTool {
    /// Type of tool
    #[serde(rename = "type", default)]
    pub tool_type: ToolType,

    /// Function definition
    pub function: FunctionDefinition,
}

impl FunctionTool {
    /// Create a function tool
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Value,
    ) -> Self {
        Self {
            tool_type: ToolType::Function,
            function: FunctionDefinition {
                name: name.into(),
                description: Some(description.into()),
                parameters,
            },
        }
    }
}

impl Hash for FunctionTool {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tool_type.hash(state);
        self.function.hash(state);
    }
}

/// Function definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    /// Function name
    pub name: String,

    /// What the function does, used by the model to pick it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Parameters schema (JSON Schema)
    pub parameters: Value,
}

impl Hash for FunctionDefinition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.description.hash(state);
        hash_json(&self.parameters, state);
    }
}

/// Tool choice modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolChoiceMode {
    /// The model will not call a tool and generates a message instead
    None,
    /// The model picks between generating a message or calling tools
    Auto,
    /// The model must call at least one tool
    Any,
    /// Same as `Any`, under the name other providers use
    Required,
}

/// Tool choice configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolChoice {
    /// none, auto, any, required
    Mode(ToolChoiceMode),
    /// Specific function
    Function {
        #[serde(rename = "type")]
        choice_type: ToolType,
        function: FunctionChoice,
    },
}

impl ToolChoice {
    pub fn none() -> Self {
        ToolChoice::Mode(ToolChoiceMode::None)
    }

    pub fn auto() -> Self {
        ToolChoice::Mode(ToolChoiceMode::Auto)
    }

    pub fn any() -> Self {
        ToolChoice::Mode(ToolChoiceMode::Any)
    }

    pub fn required() -> Self {
        ToolChoice::Mode(ToolChoiceMode::Required)
    }

    /// Force the model to call the named function
    pub fn function(name: impl Into<String>) -> Self {
        ToolChoice::Function {
            choice_type: ToolType::Function,
            function: FunctionChoice { name: name.into() },
        }
    }
}

/// Function named by a tool choice
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionChoice {
    /// Name of the function to use
    pub name: String,
}
