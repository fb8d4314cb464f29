//! Calendar source configuration types.
//!
//! A [`Source`] describes one configured calendar feed: where to fetch it
//! from, how to display its events on the site, and which events to keep.
//! Sources are loaded once from the configuration file and are read-only
//! for the rest of the run.

use serde::{Deserialize, Serialize};

/// Keyword-based filtering criteria for a source's events.
///
/// Matching is case-insensitive against the concatenated event summary and
/// description. Exclude keywords take precedence over include keywords; an
/// empty include set means "include everything not excluded".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventFilter {
    /// Keep only events matching at least one of these (when non-empty).
    pub include_keywords: Vec<String>,

    /// Drop events matching any of these.
    pub exclude_keywords: Vec<String>,
}

impl EventFilter {
    /// Creates a filter from include and exclude keyword lists.
    pub fn new(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self {
            include_keywords: include,
            exclude_keywords: exclude,
        }
    }

    /// Returns true if the filter has no keywords at all.
    pub fn is_empty(&self) -> bool {
        self.include_keywords.is_empty() && self.exclude_keywords.is_empty()
    }
}

/// A single configured calendar feed plus its display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// Human-readable source name, also the prefix of produced event ids.
    pub name: String,

    /// Contact email for the group behind this calendar.
    #[serde(default)]
    pub contact_email: String,

    /// The Google Calendar identifier to fetch.
    pub calendar_id: String,

    /// Display color for this source's events.
    #[serde(default)]
    pub color: String,

    /// Website of the group, inherited by every produced event.
    #[serde(default)]
    pub website: String,

    /// Visibility override. Absent means visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    /// Keyword filter applied to this source's events.
    #[serde(default)]
    pub event_filter: EventFilter,
}

impl Source {
    /// Returns the effective visibility for events of this source.
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }
}
