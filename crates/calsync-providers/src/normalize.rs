//! RawEvent to NormalizedEvent conversion.
//!
//! Normalization flattens the provider's event representation into the
//! catalog schema: separate date and time strings, a composed id, and
//! display metadata taken from the source configuration.
//!
//! Timestamps are kept in the timezone the provider embedded in them. The
//! catalog is rendered for human readers local to the events, so the
//! wall-clock values matter and no offset conversion is performed.

use chrono::DateTime;
use thiserror::Error;
use tracing::warn;

use calsync_core::{NormalizedEvent, STATIC_EVENT_TYPE, Source};

use crate::raw_event::{RawEvent, RawEventTime};

/// An event-scoped normalization failure.
///
/// These never abort a batch: [`normalize_events`] logs and skips the
/// offending event.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Neither a date nor a datetime was present on an endpoint.
    #[error("event {event_id} has no date or datetime")]
    MissingDate { event_id: String },

    /// A datetime was present but not valid RFC3339.
    #[error("event {event_id} has an invalid timestamp: {source}")]
    InvalidTimestamp {
        event_id: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Converts one raw event into the catalog schema.
pub fn normalize_event(raw: &RawEvent, source: &Source) -> Result<NormalizedEvent, NormalizeError> {
    let (start_date, start_time) = split_endpoint(&raw.start, &raw.id)?;
    let (end_date, end_time) = split_endpoint(&raw.end, &raw.id)?;

    Ok(NormalizedEvent {
        id: format!("{}-{}", source.name, raw.id),
        title: raw.summary.clone(),
        description: raw.description.clone(),
        event_type: STATIC_EVENT_TYPE.to_string(),
        start_date,
        end_date,
        start_time,
        end_time,
        location: raw.location.clone(),
        website: source.website.clone(),
        // The deep-link is kept even for hidden events.
        gcal_link: raw.html_link.clone(),
        visible: source.is_visible(),
        color: source.color.clone(),
    })
}

/// Splits an event endpoint into `(date, time)` strings.
///
/// An all-day date is used verbatim with a fixed `00:00` time. A datetime
/// is parsed as RFC3339 and formatted in its own embedded offset.
fn split_endpoint(
    endpoint: &RawEventTime,
    event_id: &str,
) -> Result<(String, String), NormalizeError> {
    if let Some(ref date) = endpoint.date {
        return Ok((date.clone(), "00:00".to_string()));
    }

    if let Some(ref date_time) = endpoint.date_time {
        let parsed =
            DateTime::parse_from_rfc3339(date_time).map_err(|source| {
                NormalizeError::InvalidTimestamp {
                    event_id: event_id.to_string(),
                    source,
                }
            })?;
        return Ok((
            parsed.format("%Y-%m-%d").to_string(),
            parsed.format("%H:%M").to_string(),
        ));
    }

    Err(NormalizeError::MissingDate {
        event_id: event_id.to_string(),
    })
}

/// Normalizes a batch of raw events.
///
/// A per-event failure is logged with the event id and skipped; it never
/// aborts the rest of the batch. Output order follows input order.
pub fn normalize_events(raw_events: &[RawEvent], source: &Source) -> Vec<NormalizedEvent> {
    let mut normalized = Vec::with_capacity(raw_events.len());

    for event in raw_events {
        match normalize_event(event, source) {
            Ok(ne) => normalized.push(ne),
            Err(e) => {
                warn!(source = %source.name, event_id = %event.id, "skipping event: {}", e);
            }
        }
    }

    normalized
}
