//! Funding-opportunity data structure.

use serde::{Deserialize, Serialize};

/// A funding call extracted from the opportunities feed.
///
/// Date fields hold `YYYY-MM-DD` strings; an empty string means the date
/// could not be resolved. Records without a usable `url` are never built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Opportunity {
    /// Call title
    pub title: String,

    /// Funding programme tag inferred from the text
    pub program: String,

    /// Beneficiary class inferred from the description
    pub beneficiary: String,

    /// Issuing jurisdiction
    pub country: String,

    /// Publication date, ISO or empty
    pub published: String,

    /// Application deadline, ISO or empty (may be filled by enrichment)
    pub deadline: String,

    /// Absolute URL of the call page
    pub url: String,
}
