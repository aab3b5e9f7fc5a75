//! Wire-facing serialization of chat options

use mistral_options::*;
use serde_json::{json, Value};
use std::sync::Arc;

const WIRE_FIELDS: [&str; 10] = [
    "model",
    "temperature",
    "top_p",
    "max_tokens",
    "safe_prompt",
    "random_seed",
    "response_format",
    "stop",
    "tools",
    "tool_choice",
];

struct Noop(Value);

impl FunctionCallback for Noop {
    fn name(&self) -> &str {
        "noop"
    }

    fn description(&self) -> &str {
        "Does nothing"
    }

    fn input_schema(&self) -> &Value {
        &self.0
    }

    fn call(&self, _arguments: &str, _tool_context: Option<&ToolContext>) -> anyhow::Result<String> {
        Ok(String::new())
    }
}

#[test]
fn test_only_model_is_serialized() {
    let options = ChatOptions::builder().model("x").build();
    assert_eq!(serde_json::to_value(&options).unwrap(), json!({"model": "x"}));
}

#[test]
fn test_empty_options_serialize_to_empty_object() {
    let options = ChatOptions::default();
    assert_eq!(serde_json::to_string(&options).unwrap(), "{}");
}

#[test]
fn test_functions_never_serialized() {
    let options = ChatOptions::builder().function("f1").unwrap().build();
    let value = serde_json::to_value(&options).unwrap();

    assert_eq!(value, json!({}));
    assert!(value.get("functions").is_none());
}

#[test]
fn test_local_only_fields_never_serialized() {
    let options = ChatOptions::builder()
        .model(MistralChatModel::Codestral)
        .function_callback(Arc::new(Noop(json!({"type": "object"}))))
        .functions(["f1", "f2"])
        .proxy_tool_calls(true)
        .tool_context([("secret", json!("value"))])
        .build();

    let value = options.to_wire_value().unwrap();
    assert_eq!(value, json!({"model": "codestral-latest"}));
}

#[test]
fn test_all_wire_fields() {
    let options = ChatOptions::builder()
        .model(MistralChatModel::Small)
        .temperature(0.5)
        .top_p(0.8)
        .max_tokens(100)
        .safe_prompt(true)
        .random_seed(1234)
        .response_format(ResponseFormat::JsonObject)
        .stop(["\n"])
        .tools([FunctionTool::new(
            "lookup",
            "Look a term up",
            json!({"type": "object", "properties": {"term": {"type": "string"}}}),
        )])
        .tool_choice(ToolChoice::any())
        .build();

    let value = options.to_wire_value().unwrap();
    let object = value.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    let mut expected = WIRE_FIELDS.to_vec();
    expected.sort_unstable();
    assert_eq!(keys, expected);

    assert_eq!(value["response_format"], json!({"type": "json_object"}));
    assert_eq!(value["tool_choice"], json!("any"));
    assert_eq!(value["tools"][0]["function"]["name"], "lookup");
    assert_eq!(value["random_seed"], json!(1234));
}

#[test]
fn test_wire_round_trip_keeps_wire_fields() {
    let options = ChatOptions::builder()
        .model("open-mixtral-8x7b")
        .temperature(0.1)
        .tool_choice(ToolChoice::function("lookup"))
        .stop(["END"])
        .functions(["lookup"])
        .build();

    let json = serde_json::to_string(&options).unwrap();
    let parsed: ChatOptions = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.model(), options.model());
    assert_eq!(parsed.temperature(), options.temperature());
    assert_eq!(parsed.tool_choice(), options.tool_choice());
    assert_eq!(parsed.stop(), options.stop());
    // local-only values do not survive the wire
    assert!(parsed.functions().is_empty());
    assert_ne!(parsed, options);
}
