//! The [`Tool`] trait and its type-erased counterpart [`ToolDyn`].

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ToolError;
use crate::types::{BoxFuture, ContentItem, ToolDefinition, ToolOutput};

/// Strongly-typed tool trait. Implement this for each operation.
///
/// Tools are pure: the output is a function of the arguments alone, with no
/// shared state between calls. The blanket impl of [`ToolDyn`] handles JSON
/// deserialization/serialization so implementations work with concrete Rust
/// types.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use toolcast_types::{Tool, ToolDefinition};
///
/// #[derive(serde::Deserialize, schemars::JsonSchema)]
/// #[serde(deny_unknown_fields)]
/// struct EchoArgs { message: String }
///
/// struct EchoTool;
///
/// impl Tool for EchoTool {
///     const NAME: &'static str = "echo";
///     type Args = EchoArgs;
///     type Output = String;
///     type Error = Infallible;
///
///     fn definition(&self) -> ToolDefinition {
///         ToolDefinition {
///             name: Self::NAME.into(),
///             description: "Echo the message back".into(),
///             input_schema: serde_json::to_value(schemars::schema_for!(EchoArgs)).unwrap(),
///             output_schema: None,
///             annotations: None,
///         }
///     }
///
///     async fn call(&self, args: EchoArgs) -> Result<String, Infallible> {
///         Ok(args.message)
///     }
/// }
/// ```
pub trait Tool: Send + Sync {
    /// The unique name of this tool.
    const NAME: &'static str;
    /// The deserialized input type.
    type Args: DeserializeOwned + schemars::JsonSchema + Send;
    /// The serializable output type.
    type Output: Serialize;
    /// The tool-specific error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the tool definition (name, description, schema).
    fn definition(&self) -> ToolDefinition;

    /// Execute the tool with typed arguments.
    fn call(
        &self,
        args: Self::Args,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;
}

/// Type-erased tool for dynamic dispatch. Blanket-implemented for all [`Tool`]
/// impls, enabling heterogeneous collections (`HashMap<String, Arc<dyn ToolDyn>>`)
/// while keeping type safety at the implementation level.
pub trait ToolDyn: Send + Sync {
    /// The tool's unique name.
    fn name(&self) -> &str;
    /// The tool definition (name, description, input schema).
    fn definition(&self) -> ToolDefinition;
    /// Execute the tool with a JSON value input, returning a generic output.
    fn call_dyn(&self, input: serde_json::Value) -> BoxFuture<'_, Result<ToolOutput, ToolError>>;
}

/// Blanket implementation: any `Tool` automatically becomes a `ToolDyn`.
///
/// Handles:
/// - deserializing `serde_json::Value` into `T::Args` (`ToolError::InvalidInput`)
/// - calling `T::call(args)`
/// - serializing `T::Output` into [`ToolOutput`]
/// - mapping `T::Error` into `ToolError::ExecutionFailed`
///
/// String outputs become the text content verbatim; everything else is rendered
/// as JSON.
impl<T: Tool> ToolDyn for T {
    fn name(&self) -> &str {
        T::NAME
    }

    fn definition(&self) -> ToolDefinition {
        Tool::definition(self)
    }

    fn call_dyn(&self, input: serde_json::Value) -> BoxFuture<'_, Result<ToolOutput, ToolError>> {
        Box::pin(async move {
            let args: T::Args = serde_json::from_value(input)
                .map_err(|e| ToolError::InvalidInput(e.to_string()))?;

            let output = self
                .call(args)
                .await
                .map_err(|e| ToolError::ExecutionFailed(Box::new(e)))?;

            let structured = serde_json::to_value(&output)
                .map_err(|e| ToolError::ExecutionFailed(Box::new(e)))?;

            let text = match &structured {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };

            Ok(ToolOutput {
                content: vec![ContentItem::text(text)],
                structured_content: Some(structured),
                is_error: false,
            })
        })
    }
}
