//! Protocol module for the wire-facing option types
//!
//! This module defines the request-side structures the chat options carry.
//! These structures are:
//! - Serialized with the Mistral API's field names
//! - Hashable, so options can be compared and deduplicated
//! - Free of any transport concerns

pub(crate) mod hashing;
pub mod types;

pub use types::{
    FunctionChoice, FunctionDefinition, FunctionTool, JsonSchemaFormat, MistralChatModel,
    ResponseFormat, ToolChoice, ToolChoiceMode, ToolType,
};
