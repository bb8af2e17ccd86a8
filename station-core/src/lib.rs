//! Core library for the `station` weather dashboard.
//!
//! This crate defines:
//! - The displayed weather record and the endpoint's wire format
//! - The HTTP client for the weather endpoint
//! - Dashboard state and its submit handler
//! - Configuration
//!
//! It is used by `station-cli`, but the dashboard state has no terminal dependency.

pub mod config;
pub mod dashboard;
pub mod endpoint;
pub mod error;
pub mod model;

pub use config::Config;
pub use dashboard::{Dashboard, LoadingFlag};
pub use endpoint::{HttpEndpoint, WeatherEndpoint};
pub use error::SubmitError;
pub use model::WeatherRecord;
