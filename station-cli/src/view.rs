//! Plain-text rendering of the dashboard.

use station_core::WeatherRecord;

pub const TITLE: &str = "Weather Station";
pub const HEADING: &str = "Real-Time Weather Station";
pub const TAGLINE: &str =
    "Monitor live weather conditions with precision and real-time data updates";
pub const FORM_HEADING: &str = "Enter Your Location";
pub const FORM_PLACEHOLDER: &str = "Enter city name (e.g., New York, London, Tokyo)";
pub const FORM_HINT: &str = "Enter any city name to get real-time weather information";
pub const BUTTON_IDLE: &str = "Get Weather Data";
pub const BUTTON_BUSY: &str = "Getting Weather Data...";
pub const INTEGRATION_NOTE: &str = "Ready for OpenWeatherMap API integration";
pub const FOOTER: &str = "Professional Weather Monitoring Dashboard";

const CARD_WIDTH: usize = 32;

struct Card<'a> {
    title: &'static str,
    caption: &'static str,
    value: &'a str,
}

fn cards(record: &WeatherRecord) -> [Card<'_>; 4] {
    [
        Card {
            title: "Temperature",
            caption: "Current ambient temperature",
            value: &record.temperature,
        },
        Card {
            title: "Humidity",
            caption: "Relative humidity level",
            value: &record.humidity,
        },
        Card {
            title: "Wind Speed",
            caption: "Current wind velocity",
            value: &record.wind_speed,
        },
        Card {
            title: "Rainfall",
            caption: "Precipitation amount",
            value: &record.rainfall,
        },
    ]
}

/// Render the whole dashboard for `record`.
pub fn render(record: &WeatherRecord, loading: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("== {TITLE} ==\n\n"));
    out.push_str(&format!("{HEADING}\n{TAGLINE}\n\n"));
    out.push_str(&format!("@ {}\n\n", record.location));

    let button = if loading { BUTTON_BUSY } else { BUTTON_IDLE };
    out.push_str(&format!("{FORM_HEADING}\n[ {button} ]\n{FORM_HINT}\n\n"));

    for card in cards(record) {
        out.push_str(&render_card(&card));
    }

    out.push_str(&format!("\n~ {INTEGRATION_NOTE}\n"));
    out.push_str(&format!("\n{FOOTER}\n"));
    out
}

fn render_card(card: &Card<'_>) -> String {
    let border = format!("+{}+\n", "-".repeat(CARD_WIDTH));
    let line = |text: &str| format!("| {text:<width$} |\n", width = CARD_WIDTH - 2);

    let mut out = border.clone();
    out.push_str(&line(&format!("{:<16}{:>14}", card.title, card.value)));
    out.push_str(&line(card.caption));
    out.push_str(&border);
    out
}

/// User-facing alert line.
pub fn alert(message: &str) -> String {
    format!("! {message}")
}
