//! Location and venue inference.

use std::sync::LazyLock;

use regex::Regex;

/// City sentinel for online-only events (RSS variant).
pub const ONLINE_CITY: &str = "Online";

/// Issuing jurisdiction used when no country can be inferred.
pub const DEFAULT_COUNTRY: &str = "EU";

/// Venue label for online-only events (homepage variant).
pub const ONLINE_VENUE: &str = "Online only";

/// Venue candidates longer than this are likely sentence fragments.
const MAX_VENUE_LEN: usize = 80;

static CITY_COUNTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][A-Za-zÀ-ÖØ-öø-ÿ .'-]{2,}),\s*([A-Z][A-Za-zÀ-ÖØ-öø-ÿ .'-]{2,})")
        .expect("valid venue pattern")
});

// Every word of each part must be capitalized, so a capitalized sentence
// start cannot swallow the city ("Join us in Brussels, Belgium").
static CAPITALIZED_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b([A-Z][A-Za-zÀ-ÖØ-öø-ÿ'-]+(?: [A-Z][A-Za-zÀ-ÖØ-öø-ÿ'-]+)*),\s+([A-Z][A-Za-zÀ-ÖØ-öø-ÿ'-]+(?: [A-Z][A-Za-zÀ-ÖØ-öø-ÿ'-]+)*)",
    )
    .expect("valid location pattern")
});

/// Infer (city, country) from free event text (RSS variant).
///
/// "online" anywhere maps to the online sentinel; a `Capitalized,
/// Capitalized` pair reads as city, country; otherwise the city is left
/// empty and the country defaults to the issuing jurisdiction.
pub fn infer_location(text: &str) -> (String, String) {
    if text.to_lowercase().contains("online") {
        return (ONLINE_CITY.to_string(), DEFAULT_COUNTRY.to_string());
    }
    if let Some(c) = CAPITALIZED_PAIR_RE.captures(text) {
        return (c[1].trim().to_string(), c[2].trim().to_string());
    }
    (String::new(), DEFAULT_COUNTRY.to_string())
}

/// Infer a venue string from homepage event chunk text.
pub fn infer_venue(text: &str) -> String {
    if text.to_lowercase().contains("online only") {
        return ONLINE_VENUE.to_string();
    }
    if let Some(m) = CITY_COUNTRY_RE.find(text) {
        let venue = m.as_str().trim();
        if venue.chars().count() <= MAX_VENUE_LEN {
            return venue.to_string();
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn online_keyword_maps_to_sentinel() {
        let (city, country) = infer_location("Webinar, held ONLINE via stream");
        assert_eq!(city, ONLINE_CITY);
        assert_eq!(country, DEFAULT_COUNTRY);
    }

    #[test]
    fn city_country_pair() {
        let (city, country) = infer_location("annual forum in Brussels, Belgium");
        assert_eq!(city, "Brussels");
        assert_eq!(country, "Belgium");
    }

    #[test]
    fn no_match_defaults_country() {
        let (city, country) = infer_location("workshop at the agency premises");
        assert_eq!(city, "");
        assert_eq!(country, DEFAULT_COUNTRY);
    }

    #[test]
    fn venue_online_only() {
        assert_eq!(infer_venue("Expert meeting (Online only)"), ONLINE_VENUE);
    }

    #[test]
    fn venue_city_region_shape() {
        assert_eq!(infer_venue("info day | Valletta, Malta | register"), "Valletta, Malta");
    }

    #[test]
    fn venue_too_long_is_dropped() {
        let text = format!("Somewhere{}, Elsewhere{}", "x".repeat(60), "y".repeat(60));
        assert_eq!(infer_venue(&text), "");
    }

    #[test]
    fn venue_accented_names() {
        assert_eq!(infer_venue("meet us in Málaga, Spain"), "Málaga, Spain");
    }

    #[test]
    fn venue_bound_counts_chars_not_bytes() {
        // 77 chars but 144 bytes; must still pass the 80-char bound.
        let venue = format!("A{}, Austria", "é".repeat(67));
        let text = format!("hosted at {venue}");
        assert_eq!(infer_venue(&text), venue);
    }
}
