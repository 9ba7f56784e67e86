use serde::{Deserialize, Serialize};
use std::sync::Arc;
use toolcast_tool::*;
use toolcast_types::*;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
struct ReverseArgs {
    text: String,
}

#[derive(Debug, Serialize)]
struct ReverseOutput {
    reversed: String,
}

#[derive(Debug, thiserror::Error)]
enum ReverseError {
    #[error("input too long: {0} chars")]
    TooLong(usize),
}

struct ReverseTool;

impl Tool for ReverseTool {
    const NAME: &'static str = "reverse";
    type Args = ReverseArgs;
    type Output = ReverseOutput;
    type Error = ReverseError;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.into(),
            description: "Reverse a string".into(),
            input_schema: serde_json::to_value(schemars::schema_for!(ReverseArgs)).unwrap(),
            output_schema: None,
            annotations: None,
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        if args.text.len() > 1024 {
            return Err(ReverseError::TooLong(args.text.len()));
        }
        Ok(ReverseOutput {
            reversed: args.text.chars().rev().collect(),
        })
    }
}

#[tokio::test]
async fn register_and_execute_tool() {
    let mut registry = ToolRegistry::new();
    registry.register(ReverseTool).unwrap();

    let result = registry
        .execute("reverse", serde_json::json!({"text": "abc"}))
        .await
        .unwrap();
    assert!(!result.is_error);
    assert!(
        result
            .structured_content
            .unwrap()
            .to_string()
            .contains("cba")
    );
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut registry = ToolRegistry::new();
    registry.register(ReverseTool).unwrap();

    let err = registry.register(ReverseTool).unwrap_err();
    assert!(matches!(err, ToolError::AlreadyRegistered(name) if name == "reverse"));

    // The original registration is untouched.
    assert_eq!(registry.len(), 1);
    assert!(registry.get("reverse").is_some());
}

#[test]
fn definitions_lists_all_tools() {
    let mut registry = ToolRegistry::new();
    registry.register(ReverseTool).unwrap();
    let defs = registry.definitions();
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].name, "reverse");
}

#[tokio::test]
async fn execute_unknown_tool_returns_not_found() {
    let registry = ToolRegistry::new();
    let err = registry
        .execute("nonexistent", serde_json::json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::NotFound(name) if name == "nonexistent"));
}

#[tokio::test]
async fn lookup_is_case_sensitive() {
    let mut registry = ToolRegistry::new();
    registry.register(ReverseTool).unwrap();

    let err = registry
        .execute("Reverse", serde_json::json!({"text": "abc"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::NotFound(_)));
}

#[tokio::test]
async fn missing_argument_names_parameter() {
    let mut registry = ToolRegistry::new();
    registry.register(ReverseTool).unwrap();

    let err = registry
        .execute("reverse", serde_json::json!({}))
        .await
        .unwrap_err();
    match err {
        ToolError::InvalidInput(msg) => assert!(msg.contains("text")),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[tokio::test]
async fn surplus_argument_is_rejected() {
    let mut registry = ToolRegistry::new();
    registry.register(ReverseTool).unwrap();

    let err = registry
        .execute("reverse", serde_json::json!({"text": "abc", "extra": 1}))
        .await
        .unwrap_err();
    match err {
        ToolError::InvalidInput(msg) => assert!(msg.contains("extra")),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[tokio::test]
async fn domain_error_propagates_as_execution_failed() {
    let mut registry = ToolRegistry::new();
    registry.register(ReverseTool).unwrap();

    let long = "x".repeat(2048);
    let err = registry
        .execute("reverse", serde_json::json!({"text": long}))
        .await
        .unwrap_err();
    match err {
        ToolError::ExecutionFailed(source) => {
            assert!(source.downcast_ref::<ReverseError>().is_some());
        }
        other => panic!("expected ExecutionFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn register_dyn_and_execute() {
    let mut registry = ToolRegistry::new();
    let tool: Arc<dyn ToolDyn> = Arc::new(ReverseTool);
    registry.register_dyn(tool).unwrap();

    let result = registry
        .execute("reverse", serde_json::json!({"text": "ok"}))
        .await
        .unwrap();
    assert!(!result.is_error);
}

#[test]
fn get_returns_tool() {
    let mut registry = ToolRegistry::new();
    registry.register(ReverseTool).unwrap();
    assert!(registry.get("reverse").is_some());
    assert!(registry.get("nonexistent").is_none());
}
