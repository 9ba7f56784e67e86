//! Synthetic weather reports as plain functions.

use std::fmt::Write as _;

/// Returned by [`forecast`] when the day count is outside 1–7.
pub const FORECAST_RANGE_MESSAGE: &str = "Forecast is only available for 1-7 days";

/// Forecast conditions, cycled by day.
const CONDITIONS: [&str; 5] = ["Sunny", "Partly Cloudy", "Cloudy", "Light Rain", "Clear"];

/// Base forecast temperature in Fahrenheit.
const BASE_TEMP: i64 = 70;

/// Current conditions for a city.
///
/// Matching is case-insensitive against a fixed table, with aliases ("nyc",
/// "la"). Unknown cities get a generic response embedding the input with its
/// original casing. Never fails.
pub fn current_weather(city: &str) -> String {
    match city.to_lowercase().as_str() {
        "new york" | "nyc" => {
            "Weather in New York: 72°F (22°C), Partly Cloudy, Humidity: 65%, Wind: 8 mph NW".into()
        }
        "london" => {
            "Weather in London: 59°F (15°C), Overcast, Humidity: 78%, Wind: 12 mph SW".into()
        }
        "tokyo" => "Weather in Tokyo: 75°F (24°C), Sunny, Humidity: 60%, Wind: 5 mph E".into(),
        "paris" => {
            "Weather in Paris: 66°F (19°C), Light Rain, Humidity: 82%, Wind: 10 mph W".into()
        }
        "sydney" => "Weather in Sydney: 68°F (20°C), Clear, Humidity: 55%, Wind: 15 mph SE".into(),
        "toronto" => "Weather in Toronto: 45°F (7°C), Snow, Humidity: 85%, Wind: 20 mph N".into(),
        "los angeles" | "la" => {
            "Weather in Los Angeles: 70°F (21°C), Sunny, Humidity: 60%, Wind: 10 mph E".into()
        }
        _ => format!(
            "Weather data for {city}: 70°F (21°C), Partly Cloudy, Humidity: 60%, Wind: 10 mph"
        ),
    }
}

/// A `days`-day forecast for a city.
///
/// Days outside 1–7 return [`FORECAST_RANGE_MESSAGE`] rather than an error.
/// Otherwise one line per day: conditions cycle through a fixed five-entry
/// list, the Fahrenheit temperature is `70 + (day % 3) * 5 - 5`, and Celsius
/// is derived by integer truncation. The city name affects only the label,
/// never the numbers.
pub fn forecast(city: &str, days: i64) -> String {
    if !(1..=7).contains(&days) {
        return FORECAST_RANGE_MESSAGE.to_string();
    }

    let mut out = format!("Weather forecast for {city} ({days} days):\n");
    for day in 1..=days {
        let condition = CONDITIONS[((day - 1) % CONDITIONS.len() as i64) as usize];
        let temp = BASE_TEMP + (day % 3) * 5 - 5;
        let celsius = (temp - 32) * 5 / 9;
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Day {day}: {temp}°F ({celsius}°C), {condition}");
    }
    out
}
