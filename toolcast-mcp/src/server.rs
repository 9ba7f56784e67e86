//! MCP server: expose a [`ToolRegistry`] as an MCP server.
//!
//! [`McpServer`] wraps a [`ToolRegistry`] and implements the rmcp
//! [`ServerHandler`] trait, allowing registered tools to be accessed by MCP
//! clients over `tools/list` and `tools/call`.

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, ErrorCode, ErrorData, Implementation,
    ListToolsResult, PaginatedRequestParams, ServerCapabilities, ServerInfo, Tool as RmcpTool,
    ToolAnnotations as RmcpToolAnnotations, ToolsCapability,
};
use rmcp::service::{RequestContext, RoleServer};

use toolcast_tool::ToolRegistry;
use toolcast_types::{ContentItem, McpError, ToolDefinition, ToolError};

/// MCP server that exposes a [`ToolRegistry`] via the MCP protocol.
///
/// # Example
///
/// ```ignore
/// use toolcast_mcp::McpServer;
/// use toolcast_tool::ToolRegistry;
///
/// let mut registry = ToolRegistry::new();
/// // ... register tools ...
/// let server = McpServer::new(registry).with_name("toolcast");
/// server.serve_stdio().await?;
/// ```
pub struct McpServer {
    /// The tool registry containing all available tools.
    registry: Arc<ToolRegistry>,
    /// Server name for identification.
    name: String,
    /// Server version for identification.
    version: String,
    /// Optional instructions for clients.
    instructions: Option<String>,
}

impl McpServer {
    /// Create a new MCP server wrapping the given tool registry.
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            name: "toolcast".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: None,
        }
    }

    /// Set the server name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the server version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set instructions for clients.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Serve via stdio (stdin/stdout). Blocks until the client disconnects.
    ///
    /// Anything the process logs must go to stderr; stdout carries the wire.
    ///
    /// # Errors
    ///
    /// Returns [`McpError`] if the server fails to start or the transport
    /// breaks.
    pub async fn serve_stdio(self) -> Result<(), McpError> {
        use rmcp::ServiceExt;
        use rmcp::transport::io::stdio;

        let transport = stdio();
        let service = self
            .serve(transport)
            .await
            .map_err(|e| McpError::Connection(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| McpError::Transport(e.to_string()))?;

        Ok(())
    }

    /// Get a reference to the underlying tool registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Convert our [`ToolDefinition`] to rmcp's `Tool` type.
    fn definition_to_rmcp_tool(def: &ToolDefinition) -> RmcpTool {
        let input_schema = match &def.input_schema {
            serde_json::Value::Object(m) => Arc::new(m.clone()),
            _ => Arc::new(serde_json::Map::new()),
        };

        let output_schema = def.output_schema.as_ref().and_then(|s| match s {
            serde_json::Value::Object(m) => Some(Arc::new(m.clone())),
            _ => None,
        });

        let annotations = def.annotations.as_ref().map(|a| RmcpToolAnnotations {
            title: None,
            read_only_hint: a.read_only_hint,
            destructive_hint: a.destructive_hint,
            idempotent_hint: a.idempotent_hint,
            open_world_hint: a.open_world_hint,
        });

        RmcpTool {
            name: Cow::Owned(def.name.clone()),
            title: None,
            description: Some(Cow::Owned(def.description.clone())),
            input_schema,
            output_schema,
            annotations,
            execution: None,
            icons: None,
            meta: None,
        }
    }

    /// Map a registry error onto the matching JSON-RPC error.
    fn tool_error_to_error_data(err: ToolError) -> ErrorData {
        match err {
            ToolError::NotFound(name) => ErrorData::new(
                ErrorCode::METHOD_NOT_FOUND,
                format!("tool not found: {name}"),
                None,
            ),
            ToolError::InvalidInput(msg) => {
                ErrorData::new(ErrorCode::INVALID_PARAMS, msg, None)
            }
            other => ErrorData::internal_error(other.to_string(), None),
        }
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: self.name.clone(),
                title: None,
                version: self.version.clone(),
                description: None,
                icons: None,
                website_url: None,
            },
            instructions: self.instructions.clone(),
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, ErrorData>> + Send + '_ {
        async {
            let definitions = self.registry.definitions();
            let tools: Vec<RmcpTool> = definitions
                .iter()
                .map(Self::definition_to_rmcp_tool)
                .collect();

            Ok(ListToolsResult::with_all_items(tools))
        }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, ErrorData>> + Send + '_ {
        async move {
            let name = request.name.as_ref();
            let input = match request.arguments {
                Some(args) => serde_json::Value::Object(args),
                None => serde_json::Value::Object(serde_json::Map::new()),
            };

            tracing::debug!(tool = name, "tools/call received");
            let result = self
                .registry
                .execute(name, input)
                .await
                .map_err(Self::tool_error_to_error_data)?;

            let content: Vec<Content> = result
                .content
                .into_iter()
                .map(|item| match item {
                    ContentItem::Text { text } => Content::text(text),
                })
                .collect();

            Ok(CallToolResult {
                content,
                structured_content: result.structured_content,
                is_error: if result.is_error { Some(true) } else { None },
                meta: None,
            })
        }
    }

    fn get_tool(&self, name: &str) -> Option<RmcpTool> {
        self.registry
            .get(name)
            .map(|t| Self::definition_to_rmcp_tool(&t.definition()))
    }
}
