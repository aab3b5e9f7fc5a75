//! Value equality and hashing for [`ChatOptions`]
//!
//! Floats compare by canonical bit pattern, so equality is reflexive and
//! `Eq` holds. Hashing follows the same rules field by field.

use super::ChatOptions;
use crate::protocol::hashing::{hash_f64, hash_json, same_f64};
use std::hash::{Hash, Hasher};

impl PartialEq for ChatOptions {
    fn eq(&self, other: &Self) -> bool {
        self.model == other.model
            && same_f64(self.temperature, other.temperature)
            && same_f64(self.top_p, other.top_p)
            && self.max_tokens == other.max_tokens
            && self.safe_prompt == other.safe_prompt
            && self.random_seed == other.random_seed
            && self.response_format == other.response_format
            && self.stop == other.stop
            && self.tools == other.tools
            && self.tool_choice == other.tool_choice
            && self.function_callbacks == other.function_callbacks
            && self.functions == other.functions
            && self.proxy_tool_calls == other.proxy_tool_calls
            && self.tool_context == other.tool_context
    }
}

impl Eq for ChatOptions {}

impl Hash for ChatOptions {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.model.hash(state);
        hash_f64(self.temperature, state);
        hash_f64(self.top_p, state);
        self.max_tokens.hash(state);
        self.safe_prompt.hash(state);
        self.random_seed.hash(state);
        self.response_format.hash(state);
        self.stop.hash(state);
        self.tools.hash(state);
        self.tool_choice.hash(state);
        self.function_callbacks.hash(state);
        self.functions.hash(state);
        self.proxy_tool_calls.hash(state);
        match &self.tool_context {
            Some(context) => {
                1u8.hash(state);
                context.len().hash(state);
                // BTreeMap iterates in key order, so equal maps feed identical input
                for (key, value) in context {
                    key.hash(state);
                    hash_json(value, state);
                }
            }
            None => 0u8.hash(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn digest(options: &ChatOptions) -> u64 {
        let mut hasher = DefaultHasher::new();
        options.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_nan_temperature_is_reflexive() {
        let options = ChatOptions::builder().temperature(f64::NAN).build();
        assert_eq!(options, options.copy());
        assert_eq!(digest(&options), digest(&options.copy()));
    }

    #[test]
    fn test_signed_zero_differs() {
        let positive = ChatOptions::builder().temperature(0.0).build();
        let negative = ChatOptions::builder().temperature(-0.0).build();
        assert_ne!(positive, negative);
    }

    #[test]
    fn test_absent_differs_from_empty_context() {
        let absent = ChatOptions::builder().build();
        let empty = ChatOptions::builder()
            .tool_context(Vec::<(String, serde_json::Value)>::new())
            .build();
        assert_ne!(absent, empty);
    }

    #[test]
    fn test_deduplicates_in_hash_set() {
        let a = ChatOptions::builder()
            .model("m")
            .tool_context([("user", json!({"id": 1, "roles": ["admin"]}))])
            .build();
        let b = ChatOptions::builder()
            .model("m")
            .tool_context([("user", json!({"roles": ["admin"], "id": 1}))])
            .build();
        let c = ChatOptions::builder().model("other").build();

        let set: HashSet<ChatOptions> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
