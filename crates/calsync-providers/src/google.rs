//! Google Calendar API client.
//!
//! A low-level HTTP client for the public events endpoint of the Google
//! Calendar API v3. Access is read-only and authenticated by an optional
//! static API key; there is no OAuth flow.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ProviderError, ProviderResult};
use crate::raw_event::RawEvent;

/// Base URL for Google Calendar API v3.
const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// Per-page request timeout. There is no retry; a hung request fails the
/// whole fetch for its calendar when this fires.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Google Calendar API client.
#[derive(Debug)]
pub struct GoogleCalendarClient {
    http_client: reqwest::blocking::Client,
    api_key: Option<String>,
    base_url: String,
}

impl GoogleCalendarClient {
    /// Creates a new client with the given API key.
    ///
    /// Without a key, requests are sent unauthenticated; public calendars
    /// may still answer, subject to stricter quotas.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, CALENDAR_API_BASE)
    }

    /// Creates a client against a non-default API endpoint.
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        let http_client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http_client,
            api_key,
            base_url: base_url.into(),
        }
    }

    /// Lists all events of a calendar within the given window.
    ///
    /// Recurring events are expanded into concrete instances
    /// (`singleEvents=true`) and ordered by start time. The continuation
    /// token is followed until the response omits it, so the returned
    /// sequence is the concatenation of every page's items in page order.
    pub fn list_events(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> ProviderResult<Vec<RawEvent>> {
        let mut all_events = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page =
                self.list_events_page(calendar_id, time_min, time_max, page_token.as_deref())?;

            all_events.extend(page.items);

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(
            calendar_id = %calendar_id,
            count = all_events.len(),
            "fetched events"
        );
        Ok(all_events)
    }

    /// Fetches a single page of events.
    fn list_events_page(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
        page_token: Option<&str>,
    ) -> ProviderResult<EventListResponse> {
        let url = format!(
            "{}/calendars/{}/events",
            self.base_url,
            urlencoding::encode(calendar_id)
        );

        let mut request = self.http_client.get(&url).query(&[
            ("timeMin", time_min.to_rfc3339()),
            ("timeMax", time_max.to_rfc3339()),
            ("singleEvents", "true".to_string()),
            ("orderBy", "startTime".to_string()),
        ]);

        if let Some(ref key) = self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        debug!(url = %url, page_token = page_token.is_some(), "requesting events page");

        let response = request.send().map_err(|e| {
            if e.is_timeout() {
                ProviderError::network("request timeout")
            } else if e.is_connect() {
                ProviderError::network(format!("connection failed: {}", e))
            } else {
                ProviderError::network(format!("request failed: {}", e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ProviderError::protocol(format!(
                "API request failed ({}): {}",
                status, body
            )));
        }

        let body = response
            .text()
            .map_err(|e| ProviderError::network(format!("failed to read response: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| ProviderError::decode(format!("failed to parse events response: {}", e)))
    }
}

/// Response from the events.list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventListResponse {
    #[serde(default)]
    items: Vec<RawEvent>,
    next_page_token: Option<String>,
}
