//! In-memory property source
//!
//! Serves a fixed catalogue of Hamburg listings. Every call can be made to
//! fail at random (`failure_rate`) and to take a while (`latency`), which is
//! how the app's error and loading paths get exercised without a server.

use super::{
    FetchError, FetchResult, PropertyDetailsResponse, PropertyRef, PropertySearchResponse,
    PropertySource, PropertyTypesResponse,
};
use crate::model::{Property, PropertyId, PropertyType, PropertyTypeOption, SearchQuery};
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// (value, label) pairs offered by the filter, in display order
const PROPERTY_TYPES: &[(&str, &str)] = &[
    ("detached_house", "Detached house"),
    ("semi_detached_house", "Semi-detached house"),
    ("terraced_house", "Terraced house"),
    ("apartment", "Apartment"),
    ("bungalow", "Bungalow"),
];

/// (id, address, postcode, rooms, floor area, type)
const CATALOGUE: &[(&str, &str, &str, u32, f64, &str)] = &[
    ("p-001", "Forsmannstraße 5", "22303", 6, 180.0, "detached_house"),
    ("p-002", "Hofweg 12", "22085", 3, 85.5, "apartment"),
    ("p-003", "Sierichstraße 44", "22301", 4, 120.0, "apartment"),
    ("p-004", "Elbchaussee 210", "22605", 8, 310.0, "detached_house"),
    ("p-005", "Blankeneser Landstraße 18", "22587", 5, 160.0, "detached_house"),
    ("p-006", "Mühlenkamp 7", "22303", 2, 58.0, "apartment"),
    ("p-007", "Poststraße 3", "20354", 3, 95.0, "terraced_house"),
    ("p-008", "Am Stadtrand 9", "22047", 4, 110.0, "semi_detached_house"),
    ("p-009", "Goldbekplatz 1", "22303", 1, 34.0, "apartment"),
    ("p-010", "Rothenbaumchaussee 77", "20148", 5, 140.0, "semi_detached_house"),
    ("p-011", "Kaiser-Wilhelm-Ring 2", "22949", 4, 105.0, "bungalow"),
];

/// Property source backed by the built-in catalogue
#[derive(Debug, Clone)]
pub struct FixtureSource {
    properties: Vec<Property>,
    /// Probability (0.0..=1.0) that any single call fails
    failure_rate: f64,
    /// Artificial delay applied to every call
    latency: Duration,
}

impl FixtureSource {
    /// Catalogue source that never fails and answers immediately
    pub fn new() -> Self {
        let properties = CATALOGUE
            .iter()
            .map(
                |&(id, address, postcode, rooms, floor_area, kind)| Property {
                    id: PropertyId::new(id),
                    address: address.to_string(),
                    postcode: postcode.to_string(),
                    number_of_rooms: rooms,
                    floor_area,
                    property_type: PropertyType::new(kind),
                },
            )
            .collect();

        Self::with_properties(properties)
    }

    /// Source serving an arbitrary set of listings
    pub fn with_properties(properties: Vec<Property>) -> Self {
        Self {
            properties,
            failure_rate: 0.0,
            latency: Duration::ZERO,
        }
    }

    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        // gen_bool panics outside 0..=1, and NaN means "never"
        self.failure_rate = if failure_rate.is_nan() {
            0.0
        } else {
            failure_rate.clamp(0.0, 1.0)
        };
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    #[cfg(test)]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    fn roll_failure(&self) -> bool {
        self.failure_rate > 0.0 && rand::thread_rng().gen_bool(self.failure_rate)
    }

    /// Wait out the configured latency, then maybe fail
    async fn simulate_call(&self) -> FetchResult<()> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.roll_failure() {
            return Err(FetchError::unexpected());
        }
        Ok(())
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertySource for FixtureSource {
    async fn fetch_properties(&self, query: &SearchQuery) -> FetchResult<PropertySearchResponse> {
        self.simulate_call().await?;

        let properties = self
            .properties
            .iter()
            .filter(|p| query.matches(p))
            .map(|p| PropertyRef { id: p.id.clone() })
            .collect();

        Ok(PropertySearchResponse { properties })
    }

    async fn fetch_property_details(
        &self,
        id: &PropertyId,
    ) -> FetchResult<PropertyDetailsResponse> {
        self.simulate_call().await?;

        self.properties
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .map(|property| PropertyDetailsResponse { property })
            .ok_or_else(|| FetchError::NotFound(id.clone()))
    }

    async fn get_available_property_types(&self) -> FetchResult<PropertyTypesResponse> {
        self.simulate_call().await?;

        let property_types = PROPERTY_TYPES
            .iter()
            .map(|&(value, label)| PropertyTypeOption {
                label: label.to_string(),
                value: Some(PropertyType::new(value)),
            })
            .collect();

        Ok(PropertyTypesResponse { property_types })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_st_finds_five_listings() {
        let source = FixtureSource::new();
        let response = source
            .fetch_properties(&SearchQuery::new("St", None))
            .await
            .unwrap();

        let ids: Vec<&str> = response.properties.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["p-001", "p-003", "p-005", "p-007", "p-008"]);
    }

    #[tokio::test]
    async fn test_search_st_detached_houses() {
        let source = FixtureSource::new();
        let query = SearchQuery::new("St", Some(PropertyType::new("detached_house")));
        let response = source.fetch_properties(&query).await.unwrap();
        assert_eq!(response.properties.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let source = FixtureSource::new();
        let err = source
            .fetch_property_details(&PropertyId::new("missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_certain_failure_reports_unexpected_error() {
        let source = FixtureSource::new().with_failure_rate(1.0);
        let err = source.get_available_property_types().await.unwrap_err();
        assert_eq!(err.to_string(), "An unexpected error occurred");
    }

    #[tokio::test]
    async fn test_failure_rate_is_clamped() {
        // Out-of-range rates must not panic inside gen_bool
        let always = FixtureSource::new().with_failure_rate(7.5);
        assert!(always.fetch_properties(&SearchQuery::new("St", None)).await.is_err());

        let never = FixtureSource::new().with_failure_rate(-1.0);
        assert!(never.fetch_properties(&SearchQuery::new("St", None)).await.is_ok());
    }

    #[tokio::test]
    async fn test_property_types_have_labels() {
        let source = FixtureSource::new();
        let types = source.get_available_property_types().await.unwrap();
        assert_eq!(types.property_types.len(), PROPERTY_TYPES.len());
        assert_eq!(types.property_types[0].label, "Detached house");
        assert!(types.property_types.iter().all(|o| o.value.is_some()));
    }
}
