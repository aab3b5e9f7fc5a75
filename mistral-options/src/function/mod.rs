//! Function callbacks and the registry they are looked up in
//!
//! Options never own callbacks. They hold shared handles to callbacks the
//! caller created, plus names that are resolved against an external
//! [`FunctionRegistry`] when a call is made.

mod registry;

pub use registry::{resolve_function_callbacks, FunctionRegistry, InMemoryFunctionRegistry};

use crate::options::ToolContext;
use crate::protocol::FunctionTool;
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A local function the client library may invoke on the model's behalf
pub trait FunctionCallback: Send + Sync {
    /// Name the model uses to request the call
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON Schema of the arguments object
    fn input_schema(&self) -> &Value;

    /// Execute with the model-produced JSON arguments
    fn call(&self, arguments: &str, tool_context: Option<&ToolContext>) -> anyhow::Result<String>;
}

/// Shared handle to a caller-owned [`FunctionCallback`].
///
/// Handles compare and hash by the identity of the callback they point to.
#[derive(Clone)]
pub struct FunctionCallbackHandle(Arc<dyn FunctionCallback>);

impl FunctionCallbackHandle {
    pub fn new(callback: Arc<dyn FunctionCallback>) -> Self {
        Self(callback)
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn callback(&self) -> &Arc<dyn FunctionCallback> {
        &self.0
    }

    pub fn call(&self, arguments: &str, tool_context: Option<&ToolContext>) -> anyhow::Result<String> {
        self.0.call(arguments, tool_context)
    }

    /// Tool definition advertised to the model for this callback
    pub fn to_function_tool(&self) -> FunctionTool {
        FunctionTool::new(
            self.0.name(),
            self.0.description(),
            self.0.input_schema().clone(),
        )
    }

    fn address(&self) -> *const () {
        Arc::as_ptr(&self.0) as *const ()
    }
}

impl<T: FunctionCallback + 'static> From<Arc<T>> for FunctionCallbackHandle {
    fn from(callback: Arc<T>) -> Self {
        Self(callback)
    }
}

impl From<Arc<dyn FunctionCallback>> for FunctionCallbackHandle {
    fn from(callback: Arc<dyn FunctionCallback>) -> Self {
        Self(callback)
    }
}

impl PartialEq for FunctionCallbackHandle {
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address()
    }
}

impl Eq for FunctionCallbackHandle {}

impl Hash for FunctionCallbackHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state);
    }
}

impl fmt::Debug for FunctionCallbackHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FunctionCallbackHandle")
            .field(&self.0.name())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    /// Callback returning a fixed reply, for tests
    pub(crate) struct EchoCallback {
        pub name: String,
        pub schema: Value,
    }

    impl EchoCallback {
        pub(crate) fn new(name: &str) -> Arc<Self> {
            Arc::new(Self {
                name: name.to_string(),
                schema: json!({"type": "object"}),
            })
        }
    }

    impl FunctionCallback for EchoCallback {
        fn name(&self) -> &str {
            &self.name
        }

        fn description(&self) -> &str {
            "Echoes its arguments"
        }

        fn input_schema(&self) -> &Value {
            &self.schema
        }

        fn call(&self, arguments: &str, _tool_context: Option<&ToolContext>) -> anyhow::Result<String> {
            Ok(arguments.to_string())
        }
    }

    #[test]
    fn test_identity_equality() {
        let callback = EchoCallback::new("echo");
        let a = FunctionCallbackHandle::from(callback.clone());
        let b = FunctionCallbackHandle::from(callback);
        let other = FunctionCallbackHandle::from(EchoCallback::new("echo"));

        assert_eq!(a, b);
        assert_ne!(a, other);
    }

    #[test]
    fn test_to_function_tool() {
        let handle = FunctionCallbackHandle::from(EchoCallback::new("echo"));
        let tool = handle.to_function_tool();
        assert_eq!(tool.function.name, "echo");
        assert_eq!(tool.function.description.as_deref(), Some("Echoes its arguments"));
        assert_eq!(tool.function.parameters, json!({"type": "object"}));
    }

    #[test]
    fn test_call_delegates() {
        let handle = FunctionCallbackHandle::from(EchoCallback::new("echo"));
        assert_eq!(handle.call(r#"{"x":1}"#, None).unwrap(), r#"{"x":1}"#);
        assert_eq!(format!("{:?}", handle), r#"FunctionCallbackHandle("echo")"#);
    }
}
