//! Tool registry: register, look up, and execute tools by name.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use toolcast_types::{Tool, ToolDefinition, ToolDyn, ToolError, ToolOutput};

/// Registry of tools, keyed by their unique case-sensitive name.
///
/// Tools are stored as type-erased [`ToolDyn`] trait objects. The registry is
/// built once at startup and never mutated afterwards; dispatch is read-only,
/// so a shared registry can serve any number of concurrent invocations.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn ToolDyn>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a strongly-typed tool (auto-erased to `ToolDyn`).
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::AlreadyRegistered`] if a tool with the same name
    /// exists. Name collisions are a startup configuration bug; callers should
    /// treat this as fatal.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) -> Result<(), ToolError> {
        self.register_dyn(Arc::new(tool))
    }

    /// Register a pre-erased tool.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::AlreadyRegistered`] on a name collision.
    pub fn register_dyn(&mut self, tool: Arc<dyn ToolDyn>) -> Result<(), ToolError> {
        let name = tool.name().to_string();
        match self.tools.entry(name) {
            Entry::Occupied(entry) => Err(ToolError::AlreadyRegistered(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(tool);
                Ok(())
            }
        }
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolDyn>> {
        self.tools.get(name).cloned()
    }

    /// Get definitions for all registered tools.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|t| t.definition()).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Execute a tool by name.
    ///
    /// Resolves the tool by exact name, deserializes `input` into its argument
    /// type, and runs it. Registration order has no effect on dispatch.
    ///
    /// # Errors
    ///
    /// - [`ToolError::NotFound`] if no tool has this name
    /// - [`ToolError::InvalidInput`] if the arguments do not match the tool's
    ///   declared parameters
    /// - [`ToolError::ExecutionFailed`] wrapping the tool's own error
    pub async fn execute(
        &self,
        name: &str,
        input: serde_json::Value,
    ) -> Result<ToolOutput, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;

        tracing::debug!(tool = name, "dispatching tool call");
        tool.call_dyn(input).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
