//! Event data structures.
//!
//! Two record shapes exist because the two ingestion strategies read
//! different sources: the homepage scrape sees date blocks with venues and
//! category labels, the RSS feed only free text. They are kept as separate
//! types and each writes the events snapshot in its own shape.

use serde::{Deserialize, Serialize};

/// An event scraped from the agency homepage events block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    /// Event title
    pub title: String,

    /// Start date, ISO
    pub date: String,

    /// End date, ISO or empty for single-day events
    pub end_date: String,

    /// Human display string, e.g. "02-06 Mar 2026"
    pub date_label: String,

    /// Category label, or empty if none matched
    #[serde(rename = "type")]
    pub kind: String,

    /// Venue text, or empty
    pub venue: String,

    /// Absolute URL of the event page
    pub link: String,

    /// Identifies which scrape produced the record
    pub source: String,
}

/// An event built from the events RSS feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RssEvent {
    /// Event title
    pub title: String,

    /// Country, defaults to the issuing jurisdiction
    pub country: String,

    /// City, or the online sentinel, or empty
    pub city: String,

    /// Start date, ISO or empty
    pub date: String,

    /// Absolute URL of the event page
    pub url: String,
}
