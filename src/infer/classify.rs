//! Keyword classification over fixed vocabularies.
//!
//! Each vocabulary is an ordered list of (pattern, tag) pairs and
//! classification is a first-match fold, so the rule sets stay data-driven
//! and independently testable.

/// Funding programme vocabulary, checked in order; first hit wins.
const PROGRAMS: &[(&str, &str)] = &[
    ("life", "LIFE"),
    ("horizon europe", "HORIZON EUROPE"),
    ("cef", "CEF"),
    ("erasmus", "ERASMUS"),
    ("single market", "SINGLE MARKET"),
    ("interreg", "INTERREG"),
    ("cerv", "CERV"),
    ("eu4health", "EU4HEALTH"),
    ("innovation fund", "INNOVATION FUND"),
    ("just transition", "JUST TRANSITION"),
];

/// Sentinel for calls that match no programme keyword.
pub const DEFAULT_PROGRAM: &str = "EU (F&T Portal)";

/// Beneficiary keyword groups in priority order.
const BENEFICIARY_GROUPS: &[(&[&str], &str)] = &[
    (&["sme", "small and medium"], "SMEs"),
    (&["ngo", "non-government"], "ΜΚΟ / Φορείς"),
    (&["municipal", "local authority"], "Δήμοι / Φορείς"),
    (&["citizen", "individual"], "Πολίτες"),
];

/// Default beneficiary class.
pub const DEFAULT_BENEFICIARY: &str = "Διάφοροι δικαιούχοι";

/// Event category labels as displayed by the agency.
const EVENT_TYPES: &[&str] = &[
    "Conferences and summits",
    "Training and workshops",
    "Expert meetings",
    "Info days",
];

/// Classify a funding programme from title + description text.
pub fn classify_program(text: &str) -> String {
    let t = text.to_lowercase();
    PROGRAMS
        .iter()
        .find(|(needle, _)| t.contains(needle))
        .map(|(_, tag)| (*tag).to_string())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}

/// Classify the beneficiary class from description text.
pub fn classify_beneficiary(text: &str) -> String {
    let t = text.to_lowercase();
    BENEFICIARY_GROUPS
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| t.contains(n)))
        .map(|(_, tag)| (*tag).to_string())
        .unwrap_or_else(|| DEFAULT_BENEFICIARY.to_string())
}

/// Match an event category label, returning the canonical casing.
pub fn classify_event_type(text: &str) -> Option<&'static str> {
    let t = text.to_lowercase();
    EVENT_TYPES
        .iter()
        .find(|label| t.contains(&label.to_lowercase()))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_first_match_wins() {
        assert_eq!(classify_program("LIFE call under Horizon Europe"), "LIFE");
        assert_eq!(classify_program("Horizon Europe: new calls"), "HORIZON EUROPE");
        assert_eq!(classify_program("CEF Transport info"), "CEF");
    }

    #[test]
    fn program_is_case_insensitive() {
        assert_eq!(classify_program("eu4health work programme"), "EU4HEALTH");
        assert_eq!(classify_program("INTERREG call open"), "INTERREG");
    }

    #[test]
    fn program_default_when_no_match() {
        assert_eq!(classify_program("Generic portal update"), DEFAULT_PROGRAM);
    }

    #[test]
    fn beneficiary_priority_order() {
        // SME terms outrank NGO terms even when both appear.
        assert_eq!(classify_beneficiary("open to SMEs and NGOs"), "SMEs");
        assert_eq!(classify_beneficiary("for NGO networks"), "ΜΚΟ / Φορείς");
        assert_eq!(
            classify_beneficiary("local authority partnerships"),
            "Δήμοι / Φορείς"
        );
        assert_eq!(classify_beneficiary("individual applicants"), "Πολίτες");
    }

    #[test]
    fn beneficiary_default_when_no_match() {
        assert_eq!(classify_beneficiary("research consortia"), DEFAULT_BENEFICIARY);
    }

    #[test]
    fn event_type_canonical_casing() {
        assert_eq!(
            classify_event_type("join our INFO DAYS in Brussels"),
            Some("Info days")
        );
        assert_eq!(
            classify_event_type("training and workshops session"),
            Some("Training and workshops")
        );
        assert_eq!(classify_event_type("a plain meeting"), None);
    }
}
