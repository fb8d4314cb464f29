//! The site-facing event schema.
//!
//! This module provides [`NormalizedEvent`], the flattened representation
//! of a calendar event as the site's event catalog stores it. Normalized
//! events carry plain date and time strings rather than structured
//! timestamps: the catalog is consumed by a static frontend that renders
//! them verbatim, in whatever timezone the provider reported.

use serde::{Deserialize, Serialize};

/// Type tag carried by every event this pipeline produces.
///
/// The catalog distinguishes recurring and override records (maintained by
/// hand) from materialized calendar events; everything we produce is the
/// latter.
pub const STATIC_EVENT_TYPE: &str = "static";

/// An event in the site's catalog schema.
///
/// The id combines the source name and the provider's event id
/// (`{source-name}-{event-id}`), which makes it deterministic for a given
/// source and calendar entry. Display metadata (`website`, `color`,
/// `visible`) is inherited from the source configuration, not the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedEvent {
    /// Unique id: `{source-name}-{provider-event-id}`.
    pub id: String,

    /// Event title, from the provider's summary.
    pub title: String,

    /// Event description, possibly empty.
    pub description: String,

    /// Schema type tag, always [`STATIC_EVENT_TYPE`].
    #[serde(rename = "type")]
    pub event_type: String,

    /// Start date as `YYYY-MM-DD`.
    pub start_date: String,

    /// End date as `YYYY-MM-DD`.
    pub end_date: String,

    /// Start time as `HH:MM`, `00:00` for all-day events.
    pub start_time: String,

    /// End time as `HH:MM`, `00:00` for all-day events.
    pub end_time: String,

    /// Event location, possibly empty.
    pub location: String,

    /// Website of the source group.
    pub website: String,

    /// Deep-link to the original calendar entry. Kept even for hidden
    /// events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcal_link: Option<String>,

    /// Whether the site should display this event.
    pub visible: bool,

    /// Display color of the source group.
    pub color: String,
}

/// Converts a human-readable source name into a URL-safe token.
///
/// Lowercases, turns spaces into hyphens, and drops everything that is not
/// a lowercase ASCII letter, digit, or hyphen. Not currently part of
/// persisted ids, but kept as a stable public contract for slugs.
pub fn sanitize_source_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> NormalizedEvent {
        NormalizedEvent {
            id: "Makerspace-evt1".to_string(),
            title: "Intro Workshop".to_string(),
            description: "Bring a laptop".to_string(),
            event_type: STATIC_EVENT_TYPE.to_string(),
            start_date: "2026-03-14".to_string(),
            end_date: "2026-03-14".to_string(),
            start_time: "18:00".to_string(),
            end_time: "20:00".to_string(),
            location: "Main hall".to_string(),
            website: "https://makerspace.example".to_string(),
            gcal_link: Some("https://calendar.google.com/event?eid=abc".to_string()),
            visible: true,
            color: "#ff7700".to_string(),
        }
    }

    #[test]
    fn serializes_with_camel_case_and_type_tag() {
        let json = serde_json::to_value(sample_event()).unwrap();
        assert_eq!(json["type"], "static");
        assert_eq!(json["startDate"], "2026-03-14");
        assert_eq!(json["startTime"], "18:00");
        assert_eq!(json["gcalLink"], "https://calendar.google.com/event?eid=abc");
    }

    #[test]
    fn omits_absent_gcal_link() {
        let mut event = sample_event();
        event.gcal_link = None;
        let json = serde_json::to_value(event).unwrap();
        assert!(json.get("gcalLink").is_none());
    }

    #[test]
    fn serde_roundtrip() {
        let event = sample_event();
        let json = serde_json::to_string(&event).unwrap();
        let parsed: NormalizedEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, parsed);
    }

    mod name_sanitizer {
        use super::*;

        #[test]
        fn lowercases_and_hyphenates() {
            assert_eq!(sanitize_source_name("Tech Collective"), "tech-collective");
        }

        #[test]
        fn drops_non_alphanumerics() {
            assert_eq!(sanitize_source_name("Art & Code!"), "art--code");
            assert_eq!(sanitize_source_name("Café Night"), "caf-night");
        }

        #[test]
        fn keeps_digits_and_hyphens() {
            assert_eq!(sanitize_source_name("Club-42"), "club-42");
        }

        #[test]
        fn empty_input() {
            assert_eq!(sanitize_source_name(""), "");
        }
    }
}
