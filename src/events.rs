// Events that flow from background fetch tasks back to the event loop
//
// Fetches run on spawned tasks; their outcomes come back over an mpsc channel
// as AppEvents and are applied to the store on the UI side. Using an enum keeps
// the hand-off type-safe and lets the loop pattern match on the outcome.

use crate::api::FetchResult;
use crate::model::{Property, PropertyTypeOption};

/// Completion of a background fetch
#[derive(Debug)]
pub enum AppEvent {
    /// A search (ids + details) finished for the given store generation
    SearchCompleted {
        generation: u64,
        result: FetchResult<Vec<Property>>,
    },

    /// The property type list finished loading ("All" already prepended)
    PropertyTypesLoaded(FetchResult<Vec<PropertyTypeOption>>),
}
