// Search pipeline - turns a query into an ordered list of full property records
//
// A search is two round trips: one call for the matching ids, then one detail
// call per id. The detail calls are issued together and joined; the joined
// output keeps the order of the id list, not the order in which the calls
// happened to finish.
//
// The spawn_* helpers run a pipeline on a tokio task and report back over the
// AppEvent channel, so the event loop never waits on the network.

use crate::api::{FetchResult, PropertySource, SharedSource};
use crate::events::AppEvent;
use crate::model::{Property, PropertyTypeOption, SearchQuery};
use crate::store::SearchRequest;
use futures::future::try_join_all;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Run a full search: id lookup followed by concurrent detail lookups
///
/// An empty address yields no results and makes no calls. The first failing
/// call fails the whole search.
pub async fn run_search(
    source: &dyn PropertySource,
    query: &SearchQuery,
) -> FetchResult<Vec<Property>> {
    if query.address.is_empty() {
        return Ok(Vec::new());
    }

    let hits = source.fetch_properties(query).await?;
    tracing::debug!(
        "Search '{}' matched {} listing(s)",
        query.address,
        hits.properties.len()
    );

    // try_join_all yields outputs in input order
    let details = try_join_all(
        hits.properties
            .iter()
            .map(|hit| source.fetch_property_details(&hit.id)),
    )
    .await?;

    Ok(details.into_iter().map(|d| d.property).collect())
}

/// Fetch the filter options, with the "All" entry first
pub async fn load_property_types(
    source: &dyn PropertySource,
) -> FetchResult<Vec<PropertyTypeOption>> {
    let response = source.get_available_property_types().await?;

    let mut options = Vec::with_capacity(response.property_types.len() + 1);
    options.push(PropertyTypeOption::all());
    options.extend(response.property_types);
    Ok(options)
}

/// Run a store request in the background and report the outcome
pub fn spawn_search(
    source: SharedSource,
    request: SearchRequest,
    tx: mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = run_search(source.as_ref(), &request.query).await;
        if let Err(e) = &result {
            tracing::warn!("Search #{} failed: {}", request.generation, e);
        }

        let event = AppEvent::SearchCompleted {
            generation: request.generation,
            result,
        };
        if tx.send(event).await.is_err() {
            tracing::debug!("Event loop gone, dropping search #{}", request.generation);
        }
    })
}

/// Load the property type list in the background
pub fn spawn_property_types(source: SharedSource, tx: mpsc::Sender<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = load_property_types(source.as_ref()).await;
        if let Err(e) = &result {
            tracing::warn!("Loading property types failed: {}", e);
        }
        if tx.send(AppEvent::PropertyTypesLoaded(result)).await.is_err() {
            tracing::debug!("Event loop gone, dropping property types");
        }
    })
}
