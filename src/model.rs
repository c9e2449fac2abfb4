// Domain model shared by the store, the data sources and the TUI
//
// Property records are snapshots handed out by a PropertySource. Nothing in
// the app mutates them; the store only moves them between the results list
// and the shortlist.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a property listing
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub String);

impl PropertyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Property type identifier as used by the data source (e.g. `detached_house`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyType(pub String);

impl PropertyType {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A real-estate listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub address: String,
    pub postcode: String,
    pub number_of_rooms: u32,
    /// Floor area in square meters
    pub floor_area: f64,
    pub property_type: PropertyType,
}

/// One entry of the property type filter
///
/// `value: None` is the "All" entry and always comes first in the filter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTypeOption {
    pub label: String,
    pub value: Option<PropertyType>,
}

impl PropertyTypeOption {
    /// The "no filter" option
    pub fn all() -> Self {
        Self {
            label: "All".to_string(),
            value: None,
        }
    }
}

/// The inputs that drive a search
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub address: String,
    pub property_type: Option<PropertyType>,
}

impl SearchQuery {
    pub fn new(address: impl Into<String>, property_type: Option<PropertyType>) -> Self {
        Self {
            address: address.into(),
            property_type,
        }
    }

    /// Whether a listing satisfies this query
    ///
    /// Address matching is a case-insensitive substring test, the type filter
    /// is exact equality. An empty address matches nothing.
    pub fn matches(&self, property: &Property) -> bool {
        if self.address.is_empty() {
            return false;
        }

        let address_ok = property
            .address
            .to_lowercase()
            .contains(&self.address.to_lowercase());

        let type_ok = match &self.property_type {
            Some(wanted) => &property.property_type == wanted,
            None => true,
        };

        address_ok && type_ok
    }
}
