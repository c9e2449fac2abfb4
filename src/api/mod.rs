// Data collaborator - where property listings come from
//
// The app never talks to a concrete backend directly. Everything goes through
// the PropertySource trait so the TUI, the headless CLI and the tests can share
// one search pipeline:
// - FixtureSource: in-memory catalogue with simulated latency and failures
// - HttpPropertySource: JSON over HTTP against a configured base URL

mod error;
mod fixture;
mod http;

pub use error::FetchError;
pub use fixture::FixtureSource;
pub use http::HttpPropertySource;

use crate::config::{SourceConfig, SourceKind};
use crate::model::{Property, PropertyId, PropertyTypeOption, SearchQuery};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Result alias for collaborator calls
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Reference to a search hit; details are fetched separately
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRef {
    pub id: PropertyId,
}

/// Response of `fetch_properties`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertySearchResponse {
    pub properties: Vec<PropertyRef>,
}

/// Response of `fetch_property_details`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDetailsResponse {
    pub property: Property,
}

/// Response of `get_available_property_types`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTypesResponse {
    pub property_types: Vec<PropertyTypeOption>,
}

/// The external data-fetching collaborator
///
/// All calls are async and may fail; a failure carries a message suitable for
/// showing to the user as-is.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Search listings by address and optional property type
    async fn fetch_properties(&self, query: &SearchQuery) -> FetchResult<PropertySearchResponse>;

    /// Full record for one listing
    async fn fetch_property_details(&self, id: &PropertyId)
        -> FetchResult<PropertyDetailsResponse>;

    /// Property types the source can filter by (without the "All" entry)
    async fn get_available_property_types(&self) -> FetchResult<PropertyTypesResponse>;
}

/// Shared handle to a source, cloned into every spawned fetch task
pub type SharedSource = Arc<dyn PropertySource>;

/// Build the configured property source
pub fn create_source(config: &SourceConfig) -> anyhow::Result<SharedSource> {
    let source: SharedSource = match config.kind {
        SourceKind::Fixture => Arc::new(
            FixtureSource::new()
                .with_failure_rate(config.failure_rate)
                .with_latency(Duration::from_millis(config.latency_ms)),
        ),
        SourceKind::Http => Arc::new(HttpPropertySource::new(
            &config.api_url,
            Duration::from_secs(config.timeout_secs),
        )?),
    };

    tracing::debug!("Property source: {}", config.kind.as_str());
    Ok(source)
}
