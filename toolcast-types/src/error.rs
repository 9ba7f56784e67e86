//! Error types for all toolcast crates.

/// Errors from tool registration and dispatch.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Tool not found in the registry.
    #[error("tool not found: {0}")]
    NotFound(String),
    /// A tool with this name is already registered.
    ///
    /// Registration happens once at startup; a collision is a configuration
    /// bug and should abort the process rather than shadow an existing tool.
    #[error("tool already registered: {0}")]
    AlreadyRegistered(String),
    /// The input could not be deserialized into the tool's argument type.
    ///
    /// The message comes from serde and names the offending parameter for
    /// missing or unexpected fields.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The tool itself failed.
    ///
    /// Wraps the tool's own error type; callers that care about a specific
    /// domain failure can downcast the source.
    #[error("execution failed: {0}")]
    ExecutionFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors from the MCP transport layer.
#[derive(Debug, thiserror::Error)]
pub enum McpError {
    /// Failed to start serving or accept the connection.
    #[error("connection failed: {0}")]
    Connection(String),
    /// Transport-level error after the session was established.
    #[error("transport error: {0}")]
    Transport(String),
}
