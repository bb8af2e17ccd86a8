//! State behind the dashboard view and the submit handler that updates it.

use log::{info, warn};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::{SubmitError, WeatherEndpoint, WeatherRecord};

/// Shared view of the "request in flight" flag.
///
/// Clones observe the same flag, so a renderer can show a spinner while
/// [`Dashboard::submit`] is awaiting the endpoint.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn raise(&self) -> LoadingGuard<'_> {
        self.0.store(true, Ordering::SeqCst);
        LoadingGuard(self)
    }
}

/// Clears the flag on drop, whatever way the request settled.
struct LoadingGuard<'a>(&'a LoadingFlag);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.0.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug)]
pub struct Dashboard<E> {
    endpoint: E,
    location: String,
    loading: LoadingFlag,
    record: WeatherRecord,
}

impl<E: WeatherEndpoint> Dashboard<E> {
    pub fn new(endpoint: E) -> Self {
        Self {
            endpoint,
            location: String::new(),
            loading: LoadingFlag::default(),
            record: WeatherRecord::default(),
        }
    }

    /// Current text of the location input.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_set()
    }

    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    pub fn record(&self) -> &WeatherRecord {
        &self.record
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    /// Look up the weather for the current input.
    ///
    /// Blank input fails with [`SubmitError::EmptyLocation`] before any
    /// request; otherwise the input is sent as typed. On any other failure
    /// the displayed record is left as it was.
    pub async fn submit(&mut self) -> Result<&WeatherRecord, SubmitError> {
        if self.location.trim().is_empty() {
            warn!("submit ignored: empty location");
            return Err(SubmitError::EmptyLocation);
        }

        let reply = {
            let _loading = self.loading.raise();
            self.endpoint.fetch(&self.location).await?
        };

        info!("weather updated for {}", reply.city);
        self.record = WeatherRecord::from(reply);
        Ok(&self.record)
    }
}
