//! Property source backed by a JSON HTTP API
//!
//! Endpoints (relative to the configured base URL):
//! - `GET /properties?address=..&propertyType=..` -> `{ "properties": [{ "id": .. }] }`
//! - `GET /properties/{id}` -> `{ "property": { .. } }`
//! - `GET /property-types` -> `{ "propertyTypes": [{ "label": .., "value": .. }] }`
//!
//! Error replies may carry `{ "message": ".." }`, which is passed through to the user.

use super::{
    FetchError, FetchResult, PropertyDetailsResponse, PropertySearchResponse, PropertySource,
    PropertyTypesResponse,
};
use crate::model::{PropertyId, SearchQuery};
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Body of a non-success reply
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP implementation of [`PropertySource`]
#[derive(Debug, Clone)]
pub struct HttpPropertySource {
    client: reqwest::Client,
    base: Url,
}

impl HttpPropertySource {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base = Url::parse(base_url).with_context(|| format!("Invalid API URL: {base_url}"))?;
        if base.cannot_be_a_base() {
            return Err(anyhow!("API URL cannot be used as a base: {base_url}"));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base })
    }

    /// Append path segments to the base URL (segments are percent-encoded)
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // Checked in new(): the base always has path segments
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, &str)],
    ) -> FetchResult<T> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).query(params).send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Turn a non-success reply into a FetchError, preferring the server's message
async fn check_status(response: Response) -> FetchResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_string()
        });
    tracing::warn!("HTTP {} from property API: {}", status.as_u16(), message);

    Err(FetchError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl PropertySource for HttpPropertySource {
    async fn fetch_properties(&self, query: &SearchQuery) -> FetchResult<PropertySearchResponse> {
        let mut params = vec![("address", query.address.as_str())];
        if let Some(kind) = &query.property_type {
            params.push(("propertyType", kind.as_str()));
        }
        self.get_json(self.endpoint(&["properties"]), &params).await
    }

    async fn fetch_property_details(
        &self,
        id: &PropertyId,
    ) -> FetchResult<PropertyDetailsResponse> {
        self.get_json(self.endpoint(&["properties", id.as_str()]), &[])
            .await
    }

    async fn get_available_property_types(&self) -> FetchResult<PropertyTypesResponse> {
        self.get_json(self.endpoint(&["property-types"]), &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FixtureSource;
    use crate::model::PropertyType;
    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Arc;

    type Reply<T> = Result<Json<T>, (StatusCode, Json<Value>)>;

    fn failed(status: StatusCode, err: FetchError) -> (StatusCode, Json<Value>) {
        (status, Json(json!({ "message": err.to_string() })))
    }

    async fn search(
        State(source): State<Arc<FixtureSource>>,
        Query(params): Query<HashMap<String, String>>,
    ) -> Reply<PropertySearchResponse> {
        let query = SearchQuery::new(
            params.get("address").cloned().unwrap_or_default(),
            params.get("propertyType").cloned().map(PropertyType::new),
        );
        source
            .fetch_properties(&query)
            .await
            .map(Json)
            .map_err(|e| failed(StatusCode::INTERNAL_SERVER_ERROR, e))
    }

    async fn details(
        State(source): State<Arc<FixtureSource>>,
        Path(id): Path<String>,
    ) -> Reply<PropertyDetailsResponse> {
        source
            .fetch_property_details(&PropertyId::new(id))
            .await
            .map(Json)
            .map_err(|e| failed(StatusCode::NOT_FOUND, e))
    }

    async fn types(State(source): State<Arc<FixtureSource>>) -> Reply<PropertyTypesResponse> {
        source
            .get_available_property_types()
            .await
            .map(Json)
            .map_err(|e| failed(StatusCode::INTERNAL_SERVER_ERROR, e))
    }

    async fn serve(source: FixtureSource) -> String {
        let app = Router::new()
            .route("/api/properties", get(search))
            .route("/api/properties/:id", get(details))
            .route("/api/property-types", get(types))
            .with_state(Arc::new(source));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}/api")
    }

    fn client(base: &str) -> HttpPropertySource {
        HttpPropertySource::new(base, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_search_and_details_over_http() {
        let base = serve(FixtureSource::new()).await;
        let source = client(&base);

        let query = SearchQuery::new("St", Some(PropertyType::new("detached_house")));
        let hits = source.fetch_properties(&query).await.unwrap();
        assert_eq!(hits.properties.len(), 2);

        let detail = source
            .fetch_property_details(&hits.properties[0].id)
            .await
            .unwrap();
        assert_eq!(detail.property.address, "Forsmannstraße 5");
        assert_eq!(detail.property.number_of_rooms, 6);
    }

    #[tokio::test]
    async fn test_property_types_over_http() {
        let base = serve(FixtureSource::new()).await;
        let types = client(&base).get_available_property_types().await.unwrap();
        assert_eq!(types.property_types[0].label, "Detached house");
    }

    #[tokio::test]
    async fn test_server_message_is_passed_through() {
        let base = serve(FixtureSource::new().with_failure_rate(1.0)).await;
        let err = client(&base)
            .fetch_properties(&SearchQuery::new("St", None))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 500, .. }));
        assert_eq!(err.to_string(), "An unexpected error occurred");
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let base = serve(FixtureSource::new()).await;
        let err = client(&base)
            .fetch_property_details(&PropertyId::new("nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
        assert_eq!(err.to_string(), "Property nope not found");
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let source = client("http://localhost:3000/api/");
        assert_eq!(
            source.endpoint(&["properties", "p 1"]).as_str(),
            "http://localhost:3000/api/properties/p%201"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(HttpPropertySource::new("not a url", Duration::from_secs(1)).is_err());
        assert!(HttpPropertySource::new("mailto:someone@example.com", Duration::from_secs(1)).is_err());
    }
}
