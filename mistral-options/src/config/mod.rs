//! Default chat options loaded from configuration files
//!
//! A configuration file holds every option except the function callbacks,
//! which are runtime objects. `${VAR}` references are replaced from the
//! environment before parsing. The parsed values go through
//! [`ChatOptionsBuilder`], so function names get the same validation as in
//! code. Numeric ranges are left for the API to check.

mod env;
mod error;

pub use env::interpolate_env_vars;
pub use error::ConfigError;

use crate::options::{ChatOptions, ChatOptionsBuilder, ToolContext};
use crate::protocol::{FunctionTool, ResponseFormat, ToolChoice};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

const INLINE_SOURCE: &str = "<inline>";

/// File representation of [`ChatOptions`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatOptionsConfig {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub top_p: Option<f64>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub safe_prompt: Option<bool>,
    #[serde(default)]
    pub random_seed: Option<u64>,
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
    #[serde(default)]
    pub stop: Option<Vec<String>>,
    #[serde(default)]
    pub tools: Option<Vec<FunctionTool>>,
    #[serde(default)]
    pub tool_choice: Option<ToolChoice>,
    /// Registry function names enabled by default
    #[serde(default)]
    pub functions: Vec<String>,
    #[serde(default)]
    pub proxy_tool_calls: Option<bool>,
    #[serde(default)]
    pub tool_context: Option<ToolContext>,
}

impl ChatOptionsConfig {
    /// Build the options these settings describe
    pub fn into_options(self) -> Result<ChatOptions, ConfigError> {
        let mut builder = ChatOptionsBuilder::new();

        if let Some(model) = self.model {
            builder = builder.model(model);
        }
        if let Some(temperature) = self.temperature {
            builder = builder.temperature(temperature);
        }
        if let Some(top_p) = self.top_p {
            builder = builder.top_p(top_p);
        }
        if let Some(max_tokens) = self.max_tokens {
            builder = builder.max_tokens(max_tokens);
        }
        if let Some(safe_prompt) = self.safe_prompt {
            builder = builder.safe_prompt(safe_prompt);
        }
        if let Some(random_seed) = self.random_seed {
            builder = builder.random_seed(random_seed);
        }
        if let Some(response_format) = self.response_format {
            builder = builder.response_format(response_format);
        }
        if let Some(stop) = self.stop {
            builder = builder.stop(stop);
        }
        if let Some(tools) = self.tools {
            builder = builder.tools(tools);
        }
        if let Some(tool_choice) = self.tool_choice {
            builder = builder.tool_choice(tool_choice);
        }
        for name in self.functions {
            builder = builder.function(name)?;
        }
        if let Some(proxy_tool_calls) = self.proxy_tool_calls {
            builder = builder.proxy_tool_calls(proxy_tool_calls);
        }
        if let Some(tool_context) = self.tool_context {
            builder = builder.tool_context(tool_context);
        }

        Ok(builder.build())
    }
}

/// Load default options from a YAML file
pub fn load_from_yaml<P: AsRef<Path>>(path: P) -> Result<ChatOptions, ConfigError> {
    let path = path.as_ref();
    let content = read_config(path)?;
    let options = parse_yaml(&content, &path.to_string_lossy())?;
    debug!(path = %path.display(), model = ?options.model(), "loaded default chat options");
    Ok(options)
}

/// Load default options from a JSON file
pub fn load_from_json<P: AsRef<Path>>(path: P) -> Result<ChatOptions, ConfigError> {
    let path = path.as_ref();
    let content = read_config(path)?;
    let options = parse_json(&content, &path.to_string_lossy())?;
    debug!(path = %path.display(), model = ?options.model(), "loaded default chat options");
    Ok(options)
}

/// Parse default options from YAML text
pub fn from_yaml_str(content: &str) -> Result<ChatOptions, ConfigError> {
    parse_yaml(content, INLINE_SOURCE)
}

/// Parse default options from JSON text
pub fn from_json_str(content: &str) -> Result<ChatOptions, ConfigError> {
    parse_json(content, INLINE_SOURCE)
}

fn read_config(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}

fn parse_yaml(content: &str, source: &str) -> Result<ChatOptions, ConfigError> {
    let interpolated = interpolate_env_vars(content)?;

    let config: ChatOptionsConfig =
        serde_yaml::from_str(&interpolated).map_err(|e| ConfigError::ParseError {
            path: source.to_string(),
            line: e.location().map(|l| l.line()),
            column: e.location().map(|l| l.column()),
            message: e.to_string(),
        })?;

    config.into_options()
}

fn parse_json(content: &str, source: &str) -> Result<ChatOptions, ConfigError> {
    let interpolated = interpolate_env_vars(content)?;

    let config: ChatOptionsConfig =
        serde_json::from_str(&interpolated).map_err(|e| ConfigError::ParseError {
            path: source.to_string(),
            line: Some(e.line()),
            column: Some(e.column()),
            message: e.to_string(),
        })?;

    config.into_options()
}
