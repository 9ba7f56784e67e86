//! toolcast server binary: builds the operation catalogue and serves it over
//! MCP stdio.
//!
//! Run with `RUST_LOG=debug` for per-dispatch logging. Logs go to stderr;
//! stdout carries the MCP wire.

use toolcast_math::{AddTool, ModuloTool, MultiplyTool, SubtractTool};
use toolcast_mcp::McpServer;
use toolcast_tool::ToolRegistry;
use toolcast_types::ToolError;
use toolcast_weather::{ForecastTool, WeatherTool};

/// Assemble the full catalogue. A name collision here is a configuration bug
/// and aborts startup.
fn build_registry() -> Result<ToolRegistry, ToolError> {
    let mut registry = ToolRegistry::new();
    registry.register(AddTool)?;
    registry.register(MultiplyTool)?;
    registry.register(SubtractTool)?;
    registry.register(ModuloTool)?;
    registry.register(WeatherTool)?;
    registry.register(ForecastTool)?;
    Ok(registry)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let registry = build_registry()?;
    tracing::info!(tools = registry.len(), "serving toolcast over stdio");

    McpServer::new(registry)
        .with_name("toolcast")
        .with_instructions(
            "Arithmetic helpers (addNumbers, multiplyNumbers, subtractNumbers, moduloNumbers) \
             and deterministic synthetic weather lookups (getWeather, getWeatherForecast).",
        )
        .serve_stdio()
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_holds_the_full_catalogue() {
        let registry = build_registry().unwrap();
        assert_eq!(registry.len(), 6);
        for name in [
            "addNumbers",
            "multiplyNumbers",
            "subtractNumbers",
            "moduloNumbers",
            "getWeather",
            "getWeatherForecast",
        ] {
            assert!(registry.get(name).is_some(), "missing {name}");
        }
    }
}
