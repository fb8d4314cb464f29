//! The per-source sync pipeline.
//!
//! Sources are processed strictly sequentially. A source that fails to
//! fetch is logged and skipped; the loop always proceeds to the next one.
//! The only state shared across sources is the append-only accumulator of
//! normalized events, which the caller hands to the catalog merge once
//! every source has been visited.

use chrono::{DateTime, Datelike, Months, Utc};
use tracing::{info, warn};

use calsync_core::{NormalizedEvent, Source};
use calsync_providers::{GoogleCalendarClient, fetch_filtered_events, normalize_events};

/// Computes the fetch window around `now`.
///
/// The window starts at the first day of the month `past_months` months
/// back, at 00:00:00 UTC, and ends at the last day of the month
/// `future_months` months ahead, at 23:59:59 UTC.
pub fn sync_window(
    now: DateTime<Utc>,
    past_months: u32,
    future_months: u32,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let first_of_month = now
        .date_naive()
        .with_day(1)
        .expect("day one is valid in every month");

    let min_date = first_of_month - Months::new(past_months);
    let max_date = (first_of_month + Months::new(future_months + 1))
        .pred_opt()
        .expect("date has a predecessor");

    let time_min = min_date
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time")
        .and_utc();
    let time_max = max_date
        .and_hms_opt(23, 59, 59)
        .expect("end of day is a valid time")
        .and_utc();

    (time_min, time_max)
}

/// Fetches, filters, and normalizes events for every source in order.
///
/// Returns the accumulated normalized events in source-major order, each
/// source's events in the order the provider returned them. A failing
/// source contributes nothing; the remaining sources are still processed.
pub fn collect_events(
    client: &GoogleCalendarClient,
    sources: &[Source],
    time_min: DateTime<Utc>,
    time_max: DateTime<Utc>,
) -> Vec<NormalizedEvent> {
    let mut all_events = Vec::new();

    for source in sources {
        info!(source = %source.name, calendar_id = %source.calendar_id, "fetching events");

        let events = match fetch_filtered_events(client, source, time_min, time_max) {
            Ok(events) => events,
            Err(e) => {
                warn!("skipping source: {}", e);
                continue;
            }
        };
        info!(source = %source.name, count = events.len(), "fetched events");

        let normalized = normalize_events(&events, source);
        info!(source = %source.name, count = normalized.len(), "normalized events");

        all_events.extend(normalized);
    }

    all_events
}

#[cfg(test)]
mod tests {
    use super::*;
    use calsync_core::EventFilter;
    use chrono::TimeZone;
    use mockito::Matcher;

    mod window {
        use super::*;

        #[test]
        fn spans_first_of_past_month_to_last_of_future_month() {
            let now = Utc.with_ymd_and_hms(2026, 8, 6, 15, 30, 0).unwrap();
            let (time_min, time_max) = sync_window(now, 12, 12);

            assert_eq!(time_min, Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap());
            assert_eq!(
                time_max,
                Utc.with_ymd_and_hms(2027, 8, 31, 23, 59, 59).unwrap()
            );
        }

        #[test]
        fn handles_year_boundaries() {
            let now = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap();
            let (time_min, time_max) = sync_window(now, 2, 12);

            assert_eq!(time_min, Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap());
            assert_eq!(
                time_max,
                Utc.with_ymd_and_hms(2027, 1, 31, 23, 59, 59).unwrap()
            );
        }

        #[test]
        fn end_of_month_lengths_differ() {
            // February end, and a 30-day month end.
            let now = Utc.with_ymd_and_hms(2026, 12, 1, 0, 0, 0).unwrap();
            let (_, time_max) = sync_window(now, 0, 2);
            assert_eq!(
                time_max,
                Utc.with_ymd_and_hms(2027, 2, 28, 23, 59, 59).unwrap()
            );

            let (_, time_max) = sync_window(now, 0, 10);
            assert_eq!(
                time_max,
                Utc.with_ymd_and_hms(2027, 10, 31, 23, 59, 59).unwrap()
            );
        }

        #[test]
        fn zero_months_covers_the_current_month() {
            let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
            let (time_min, time_max) = sync_window(now, 0, 0);

            assert_eq!(time_min, Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap());
            assert_eq!(
                time_max,
                Utc.with_ymd_and_hms(2026, 8, 31, 23, 59, 59).unwrap()
            );
        }
    }

    mod collection {
        use super::*;

        fn make_source(name: &str, calendar_id: &str) -> Source {
            Source {
                name: name.to_string(),
                contact_email: String::new(),
                calendar_id: calendar_id.to_string(),
                color: "#000000".to_string(),
                website: String::new(),
                visible: None,
                event_filter: EventFilter::default(),
            }
        }

        fn one_event_body(id: &str) -> String {
            format!(
                r#"{{"items": [{{"id": "{id}", "summary": "Event",
                    "start": {{"date": "2026-06-01"}},
                    "end": {{"date": "2026-06-02"}},
                    "status": "confirmed"}}]}}"#
            )
        }

        fn window() -> (DateTime<Utc>, DateTime<Utc>) {
            (
                Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap(),
            )
        }

        #[test]
        fn accumulates_in_source_order() {
            let mut server = mockito::Server::new();
            server
                .mock("GET", "/calendars/alpha/events")
                .match_query(Matcher::Any)
                .with_body(one_event_body("a1"))
                .create();
            server
                .mock("GET", "/calendars/beta/events")
                .match_query(Matcher::Any)
                .with_body(one_event_body("b1"))
                .create();

            let client = GoogleCalendarClient::with_base_url(None, server.url());
            let sources = vec![make_source("Alpha", "alpha"), make_source("Beta", "beta")];
            let (time_min, time_max) = window();

            let events = collect_events(&client, &sources, time_min, time_max);
            let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
            assert_eq!(ids, vec!["Alpha-a1", "Beta-b1"]);
        }

        #[test]
        fn failing_source_is_skipped_and_the_run_continues() {
            let mut server = mockito::Server::new();
            server
                .mock("GET", "/calendars/broken/events")
                .match_query(Matcher::Any)
                .with_status(500)
                .create();
            server
                .mock("GET", "/calendars/healthy/events")
                .match_query(Matcher::Any)
                .with_body(one_event_body("h1"))
                .create();

            let client = GoogleCalendarClient::with_base_url(None, server.url());
            let sources = vec![
                make_source("Broken", "broken"),
                make_source("Healthy", "healthy"),
            ];
            let (time_min, time_max) = window();

            let events = collect_events(&client, &sources, time_min, time_max);
            let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
            assert_eq!(ids, vec!["Healthy-h1"]);
        }

        #[test]
        fn no_sources_yields_no_events() {
            let client = GoogleCalendarClient::with_base_url(None, "http://127.0.0.1:9");
            let (time_min, time_max) = window();
            let events = collect_events(&client, &[], time_min, time_max);
            assert!(events.is_empty());
        }
    }
}
