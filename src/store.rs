//! Search state store
//!
//! Single owner of the cross-cutting workflow state: the committed address,
//! the active property type filter, the current results and the shortlist.
//!
//! Every transition is a plain method with no I/O. Transitions that need data
//! return a [`SearchRequest`] stamped with a generation number; the caller runs
//! it and feeds the outcome back through [`SearchStore::receive_results`] or
//! [`SearchStore::receive_failure`]. Outcomes carrying an older generation are
//! dropped, so a slow search can never overwrite a newer one.

use crate::api::FetchError;
use crate::model::{Property, PropertyId, PropertyType, SearchQuery};

/// A search the caller should run on behalf of the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: u64,
    pub query: SearchQuery,
}

/// Root state of the property search workflow
#[derive(Debug, Default)]
pub struct SearchStore {
    address: String,
    property_type_filter: Option<PropertyType>,
    results: Vec<Property>,
    selection: Vec<Property>,
    /// Bumped whenever the inputs change; identifies the current request
    generation: u64,
    /// Generation of the request still awaiting an outcome, if any
    pending: Option<u64>,
}

impl SearchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property_type_filter(&self) -> Option<&PropertyType> {
        self.property_type_filter.as_ref()
    }

    pub fn results(&self) -> &[Property] {
        &self.results
    }

    pub fn selection(&self) -> &[Property] {
        &self.selection
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the current request is still outstanding
    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// The query the current inputs describe
    pub fn query(&self) -> SearchQuery {
        SearchQuery::new(self.address.clone(), self.property_type_filter.clone())
    }

    /// Commit a new address
    ///
    /// Unchanged input is a no-op. An empty address clears the results
    /// without a request.
    pub fn set_address(&mut self, address: impl Into<String>) -> Option<SearchRequest> {
        let address = address.into();
        if address == self.address {
            return None;
        }
        self.address = address;
        self.restart()
    }

    /// Change the property type filter (`None` = all types)
    pub fn set_filter(&mut self, filter: Option<PropertyType>) -> Option<SearchRequest> {
        if filter == self.property_type_filter {
            return None;
        }
        self.property_type_filter = filter;
        self.restart()
    }

    /// Re-run the current query regardless of whether anything changed
    pub fn refresh(&mut self) -> Option<SearchRequest> {
        self.restart()
    }

    /// Start a new generation for the current inputs
    fn restart(&mut self) -> Option<SearchRequest> {
        self.generation += 1;

        if self.address.is_empty() {
            self.results.clear();
            self.pending = None;
            return None;
        }

        self.pending = Some(self.generation);
        Some(SearchRequest {
            generation: self.generation,
            query: self.query(),
        })
    }

    fn is_current(&self, generation: u64) -> bool {
        generation == self.generation && self.pending == Some(generation)
    }

    /// Accept the results of a request; returns false if they were stale
    pub fn receive_results(&mut self, generation: u64, results: Vec<Property>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.pending = None;
        self.results = results;
        true
    }

    /// Record a failed request; returns true if it belonged to the current one
    ///
    /// State is left untouched either way: the last good results stay visible.
    pub fn receive_failure(&mut self, generation: u64, _error: &FetchError) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.pending = None;
        true
    }

    pub fn is_selected(&self, id: &PropertyId) -> bool {
        self.selection.iter().any(|p| &p.id == id)
    }

    /// Checkbox semantics: checked adds (once), unchecked removes by id
    pub fn toggle_selection(&mut self, property: &Property, checked: bool) {
        if checked {
            if !self.is_selected(&property.id) {
                self.selection.push(property.clone());
            }
        } else {
            self.selection.retain(|p| p.id != property.id);
        }
    }

    /// Flip membership of a property (keyboard toggle)
    ///
    /// Returns the new checked state.
    pub fn flip_selection(&mut self, property: &Property) -> bool {
        let checked = !self.is_selected(&property.id);
        self.toggle_selection(property, checked);
        checked
    }
}
