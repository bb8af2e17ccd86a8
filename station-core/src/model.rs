use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const TEMPERATURE_PLACEHOLDER: &str = "-- °C";
pub const HUMIDITY_PLACEHOLDER: &str = "-- %";
pub const WIND_SPEED_PLACEHOLDER: &str = "-- km/h";
pub const RAINFALL_PLACEHOLDER: &str = "-- mm";
pub const LOCATION_PLACEHOLDER: &str = "Enter your location";

/// The values currently shown on the dashboard cards.
///
/// Only temperature and location come from the endpoint. The other three
/// stay on their placeholders after every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRecord {
    pub temperature: String,
    pub humidity: String,
    pub wind_speed: String,
    pub rainfall: String,
    pub location: String,
}

impl Default for WeatherRecord {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE_PLACEHOLDER.to_string(),
            humidity: HUMIDITY_PLACEHOLDER.to_string(),
            wind_speed: WIND_SPEED_PLACEHOLDER.to_string(),
            rainfall: RAINFALL_PLACEHOLDER.to_string(),
            location: LOCATION_PLACEHOLDER.to_string(),
        }
    }
}

impl From<StationReply> for WeatherRecord {
    fn from(reply: StationReply) -> Self {
        Self {
            temperature: format!("{} °C", reply.temperature),
            location: reply.city,
            ..Self::default()
        }
    }
}

/// Request body sent to the endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CityQuery<'a> {
    pub city: &'a str,
}

/// Success body. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct StationReply {
    pub temperature: Temperature,
    pub city: String,
}

/// Failure body. `error` is usually a string but any JSON value is accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorReply {
    #[serde(default)]
    pub error: Option<Value>,
}

impl ErrorReply {
    /// Text to show the user, or `None` when the generic message applies.
    ///
    /// Falsy values (`null`, `false`, `0`, `""`) and values that print as
    /// nothing (`[]`) count as missing.
    pub fn message(&self) -> Option<String> {
        let value = self.error.as_ref()?;
        let falsy = match value {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(_) | Value::Object(_) => false,
        };
        if falsy {
            return None;
        }
        Some(display_value(value)).filter(|m| !m.is_empty())
    }
}

/// Print a JSON value the way a browser alert shows it.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n
            .as_f64()
            .map(display_number)
            .unwrap_or_else(|| n.to_string()),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn display_number(v: f64) -> String {
    // 24.0 prints as "24", same as the integral case.
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        (v as i64).to_string()
    } else {
        v.to_string()
    }
}

/// The endpoint reports temperature either as a number or as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Temperature {
    Number(f64),
    Text(String),
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temperature::Number(v) => f.write_str(&display_number(*v)),
            Temperature::Text(s) => f.write_str(s),
        }
    }
}
