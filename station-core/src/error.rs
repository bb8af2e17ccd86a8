use thiserror::Error;

/// Why a submission did not update the dashboard.
///
/// The `Display` text is what the user sees in the alert.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Please enter a location")]
    EmptyLocation,
    #[error("{}", .0.as_deref().unwrap_or("Failed to get weather data"))]
    Rejected(Option<String>),
    #[error("Failed to fetch weather data")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to fetch weather data")]
    Malformed(#[from] serde_json::Error),
}
