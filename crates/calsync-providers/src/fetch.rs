//! Per-source event fetching and keyword filtering.
//!
//! Drives the [`GoogleCalendarClient`] for one configured source and
//! applies the source's filter: cancelled events are dropped first, then
//! exclude keywords, then include keywords. Provider order is preserved.

use chrono::{DateTime, Utc};
use tracing::debug;

use calsync_core::{EventFilter, Source};

use crate::error::ProviderResult;
use crate::google::GoogleCalendarClient;
use crate::raw_event::RawEvent;

/// Fetches a source's events within the window and filters them.
///
/// Client errors are annotated with the source name before they are
/// returned, so the caller can log and skip the source without extra
/// bookkeeping.
pub fn fetch_filtered_events(
    client: &GoogleCalendarClient,
    source: &Source,
    time_min: DateTime<Utc>,
    time_max: DateTime<Utc>,
) -> ProviderResult<Vec<RawEvent>> {
    let events = client
        .list_events(&source.calendar_id, time_min, time_max)
        .map_err(|e| e.with_source_name(&source.name))?;

    let total = events.len();
    let filtered: Vec<RawEvent> = events
        .into_iter()
        .filter(|event| !event.is_cancelled() && should_include_event(event, &source.event_filter))
        .collect();

    debug!(
        source = %source.name,
        total,
        kept = filtered.len(),
        "filtered events"
    );
    Ok(filtered)
}

/// Applies the keyword rules to one event.
///
/// Matching is case-insensitive substring search over the summary and
/// description. Exclude keywords win over include keywords; an empty
/// include set keeps everything not excluded. Empty keyword strings are
/// ignored on both sides.
fn should_include_event(event: &RawEvent, filter: &EventFilter) -> bool {
    let text = event.filter_text();

    for keyword in &filter.exclude_keywords {
        if !keyword.is_empty() && text.contains(&keyword.to_lowercase()) {
            return false;
        }
    }

    if filter.include_keywords.is_empty() {
        return true;
    }

    filter
        .include_keywords
        .iter()
        .any(|keyword| !keyword.is_empty() && text.contains(&keyword.to_lowercase()))
}
