//! Name-based lookup of function callbacks

use super::FunctionCallbackHandle;
use crate::error::{OptionsError, OptionsResult};
use crate::options::FunctionCallingOptions;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// External collaborator that maps function names to callbacks
pub trait FunctionRegistry {
    fn resolve(&self, name: &str) -> Option<FunctionCallbackHandle>;
}

/// Registry backed by a map, keyed by callback name
#[derive(Debug, Clone, Default)]
pub struct InMemoryFunctionRegistry {
    callbacks: HashMap<String, FunctionCallbackHandle>,
}

impl InMemoryFunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback under its own name, returning the one it replaced
    pub fn register(
        &mut self,
        callback: impl Into<FunctionCallbackHandle>,
    ) -> Option<FunctionCallbackHandle> {
        let callback = callback.into();
        self.callbacks.insert(callback.name().to_string(), callback)
    }

    pub fn with_callback(mut self, callback: impl Into<FunctionCallbackHandle>) -> Self {
        self.register(callback);
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.callbacks.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl FunctionRegistry for InMemoryFunctionRegistry {
    fn resolve(&self, name: &str) -> Option<FunctionCallbackHandle> {
        self.callbacks.get(name).cloned()
    }
}

/// Callbacks active for a single call.
///
/// The options' own callbacks come first, followed by every enabled function
/// name not already covered, looked up in `registry`. Each name appears once.
pub fn resolve_function_callbacks<O>(
    options: &O,
    registry: &dyn FunctionRegistry,
) -> OptionsResult<Vec<FunctionCallbackHandle>>
where
    O: FunctionCallingOptions + ?Sized,
{
    let mut seen = HashSet::new();
    let mut active = Vec::new();

    for callback in options.function_callbacks() {
        if seen.insert(callback.name().to_string()) {
            active.push(callback.clone());
        }
    }

    for name in options.functions() {
        if seen.contains(name.as_str()) {
            continue;
        }
        let callback = registry
            .resolve(name)
            .ok_or_else(|| OptionsError::UnknownFunction(name.clone()))?;
        seen.insert(name.clone());
        active.push(callback);
    }

    debug!(
        inline = options.function_callbacks().len(),
        named = options.functions().len(),
        active = active.len(),
        "resolved function callbacks"
    );
    Ok(active)
}
