//! Google Calendar retrieval and normalization.
//!
//! This crate covers the provider-facing half of the sync pipeline:
//!
//! - [`GoogleCalendarClient`] - paginated HTTP access to the events API
//! - [`RawEvent`] - the provider's event representation, pre-normalization
//! - [`fetch_filtered_events`] - per-source fetch plus keyword filtering
//! - [`normalize_events`] - conversion into the site's catalog schema
//!
//! ```text
//! Google Calendar API
//!         │
//!         ▼ GoogleCalendarClient::list_events (all pages)
//!   Vec<RawEvent>
//!         │
//!         ▼ fetch_filtered_events (drop cancelled, keyword rules)
//!   Vec<RawEvent>
//!         │
//!         ▼ normalize_events (per-event, failures skipped)
//!   Vec<NormalizedEvent>
//! ```

pub mod error;
pub mod fetch;
pub mod google;
pub mod normalize;
pub mod raw_event;

pub use error::{ProviderError, ProviderErrorCode, ProviderResult};
pub use fetch::fetch_filtered_events;
pub use google::GoogleCalendarClient;
pub use normalize::{NormalizeError, normalize_event, normalize_events};
pub use raw_event::{RawEvent, RawEventTime};
