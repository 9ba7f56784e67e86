//! [`Tool`] impls for the numeric operations.

use std::convert::Infallible;

use serde::Deserialize;
use toolcast_types::{Tool, ToolAnnotations, ToolDefinition};

use crate::ops::{self, MathError};

/// Arguments shared by all four numeric tools: two `f64` operands.
///
/// Unknown fields are rejected so a call with surplus arguments fails argument
/// validation instead of being silently truncated.
#[derive(Debug, Clone, Copy, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BinaryArgs {
    /// First operand.
    pub number1: f64,
    /// Second operand.
    pub number2: f64,
}

fn binary_definition(name: &str, description: &str) -> ToolDefinition {
    ToolDefinition {
        name: name.into(),
        description: description.into(),
        input_schema: schemars::schema_for!(BinaryArgs).to_value(),
        output_schema: None,
        annotations: Some(ToolAnnotations {
            read_only_hint: Some(true),
            idempotent_hint: Some(true),
            ..Default::default()
        }),
    }
}

/// `addNumbers`: `number1 + number2`.
pub struct AddTool;

impl Tool for AddTool {
    const NAME: &'static str = "addNumbers";
    type Args = BinaryArgs;
    type Output = f64;
    type Error = Infallible;

    fn definition(&self) -> ToolDefinition {
        binary_definition(Self::NAME, "Add two numbers and return the result")
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        Ok(ops::add(args.number1, args.number2))
    }
}

/// `multiplyNumbers`: `number1 * number2`.
pub struct MultiplyTool;

impl Tool for MultiplyTool {
    const NAME: &'static str = "multiplyNumbers";
    type Args = BinaryArgs;
    type Output = f64;
    type Error = Infallible;

    fn definition(&self) -> ToolDefinition {
        binary_definition(Self::NAME, "Multiply two numbers and return the result")
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        Ok(ops::multiply(args.number1, args.number2))
    }
}

/// `subtractNumbers`: `number1 - number2`.
pub struct SubtractTool;

impl Tool for SubtractTool {
    const NAME: &'static str = "subtractNumbers";
    type Args = BinaryArgs;
    type Output = f64;
    type Error = Infallible;

    fn definition(&self) -> ToolDefinition {
        binary_definition(Self::NAME, "Subtract two numbers and return the result")
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        Ok(ops::subtract(args.number1, args.number2))
    }
}

/// `moduloNumbers`: remainder of `number1` by `number2`.
///
/// The only numeric tool that can fail: a zero divisor surfaces as
/// [`MathError::DivisionByZero`].
pub struct ModuloTool;

impl Tool for ModuloTool {
    const NAME: &'static str = "moduloNumbers";
    type Args = BinaryArgs;
    type Output = f64;
    type Error = MathError;

    fn definition(&self) -> ToolDefinition {
        binary_definition(Self::NAME, "Calculate the modulo (remainder) of two numbers")
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        ops::modulo(args.number1, args.number2)
    }
}
