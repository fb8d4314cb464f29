//! Raw event types from the calendar provider.
//!
//! [`RawEvent`] mirrors one element of the events API's `items` array and
//! deserializes from it directly. Instances live only between the page
//! response and normalization.

use serde::{Deserialize, Serialize};

/// A date or datetime endpoint as the provider reports it.
///
/// All-day events carry `date` (`YYYY-MM-DD`); timed events carry
/// `date_time` (RFC3339 with offset) and sometimes an IANA `time_zone`.
/// Both can be absent on malformed entries; the normalizer rejects those.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawEventTime {
    /// All-day date, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// RFC3339 timestamp with timezone offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,

    /// IANA timezone identifier, informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl RawEventTime {
    /// Creates an all-day endpoint.
    pub fn all_day(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            ..Self::default()
        }
    }

    /// Creates a timed endpoint from an RFC3339 timestamp.
    pub fn timed(date_time: impl Into<String>) -> Self {
        Self {
            date_time: Some(date_time.into()),
            ..Self::default()
        }
    }

    /// Returns true if neither a date nor a datetime is present.
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.date_time.is_none()
    }
}

/// One event as returned by the provider, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawEvent {
    /// Provider-assigned event id.
    pub id: String,

    /// Event title.
    pub summary: String,

    /// Event description, often empty.
    pub description: String,

    /// Event location, often empty.
    pub location: String,

    /// Start endpoint.
    pub start: RawEventTime,

    /// End endpoint.
    pub end: RawEventTime,

    /// Deep-link to the event in the provider's UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_link: Option<String>,

    /// Event status; `cancelled` is the only value with semantic effect.
    pub status: String,
}

impl RawEvent {
    /// Creates a raw event with the given id and endpoints.
    pub fn new(id: impl Into<String>, start: RawEventTime, end: RawEventTime) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            ..Self::default()
        }
    }

    /// Returns true if the provider marked this event cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.status == "cancelled"
    }

    /// Returns the lowercased summary and description, the text the
    /// keyword filter matches against.
    pub fn filter_text(&self) -> String {
        format!("{} {}", self.summary, self.description).to_lowercase()
    }

    /// Builder method to set the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method to set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Builder method to set the deep-link.
    pub fn with_html_link(mut self, html_link: impl Into<String>) -> Self {
        self.html_link = Some(html_link.into());
        self
    }

    /// Builder method to set the status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}
