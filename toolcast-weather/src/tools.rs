//! [`Tool`] impls for the weather lookups.

use std::convert::Infallible;

use serde::Deserialize;
use toolcast_types::{Tool, ToolAnnotations, ToolDefinition};

use crate::report;

fn weather_annotations() -> Option<ToolAnnotations> {
    Some(ToolAnnotations {
        read_only_hint: Some(true),
        idempotent_hint: Some(true),
        ..Default::default()
    })
}

/// Arguments for `getWeather`.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WeatherArgs {
    /// City to look up.
    pub city_name: String,
}

/// Arguments for `getWeatherForecast`.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ForecastArgs {
    /// City to look up.
    pub city_name: String,
    /// Number of days to forecast (1–7).
    pub days: i64,
}

/// `getWeather`: current conditions for a city.
pub struct WeatherTool;

impl Tool for WeatherTool {
    const NAME: &'static str = "getWeather";
    type Args = WeatherArgs;
    type Output = String;
    type Error = Infallible;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.into(),
            description: "Get current weather information for a city".into(),
            input_schema: schemars::schema_for!(WeatherArgs).to_value(),
            output_schema: None,
            annotations: weather_annotations(),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        Ok(report::current_weather(&args.city_name))
    }
}

/// `getWeatherForecast`: a multi-day forecast for a city.
pub struct ForecastTool;

impl Tool for ForecastTool {
    const NAME: &'static str = "getWeatherForecast";
    type Args = ForecastArgs;
    type Output = String;
    type Error = Infallible;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.into(),
            description: "Get weather forecast for a city for the next few days".into(),
            input_schema: schemars::schema_for!(ForecastArgs).to_value(),
            output_schema: None,
            annotations: weather_annotations(),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        Ok(report::forecast(&args.city_name, args.days))
    }
}
