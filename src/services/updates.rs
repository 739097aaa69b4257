// src/services/updates.rs
//
// Canned regional health information. Everything here is a pure function
// of its string inputs over immutable tables.

pub const NO_DATA: &str = "No data available.";
const NO_ALERTS: &str = "⚠️ No regional alerts found.";
const NO_SCHEMES: &str = "✅ No schemes found.";

const TELANGANA_ALERTS: [&str; 3] = [
    "1. Dengue alert in Hyderabad.",
    "2. COVID-19 vaccination drive ongoing.",
    "3. Seasonal flu awareness campaign.",
];

const TELANGANA_SCHEMES: [&str; 3] = [
    "1. Aarogya Sri Health Insurance Scheme.",
    "2. Telangana Nutrition Mission.",
    "3. Free health checkups for seniors.",
];

const FAQS: [&str; 3] = [
    "1. Fever → Stay hydrated, consult doctor if persistent.",
    "2. Dengue prevention → Avoid stagnant water.",
    "3. Flu spreads via droplets → Maintain hygiene.",
];

#[derive(Debug, PartialEq, Eq)]
enum UpdateKind {
    Alerts,
    Schemes,
    Faq,
    Unknown,
}

impl UpdateKind {
    // The type string is matched case-sensitively; region is not.
    fn parse(kind: &str) -> Self {
        match kind {
            "alerts" => Self::Alerts,
            "schemes" => Self::Schemes,
            "faq" => Self::Faq,
            _ => Self::Unknown,
        }
    }
}

pub fn dispatch_update(kind: &str, region: &str) -> String {
    match UpdateKind::parse(kind) {
        UpdateKind::Alerts => fetch_health_alerts(region),
        UpdateKind::Schemes => fetch_health_schemes(region),
        UpdateKind::Faq => fetch_faqs(region),
        UpdateKind::Unknown => NO_DATA.to_string(),
    }
}

pub fn fetch_health_alerts(region: &str) -> String {
    if region.eq_ignore_ascii_case("telangana") {
        TELANGANA_ALERTS.join("<br>")
    } else {
        NO_ALERTS.to_string()
    }
}

pub fn fetch_health_schemes(region: &str) -> String {
    if region.eq_ignore_ascii_case("telangana") {
        TELANGANA_SCHEMES.join("<br>")
    } else {
        NO_SCHEMES.to_string()
    }
}

/// FAQs are the same everywhere; the region is accepted and ignored.
pub fn fetch_faqs(_region: &str) -> String {
    FAQS.join("<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_match_is_case_insensitive() {
        assert_eq!(
            dispatch_update("alerts", "Telangana"),
            dispatch_update("alerts", "telangana")
        );
        assert_eq!(
            dispatch_update("alerts", "TELANGANA"),
            dispatch_update("alerts", "telangana")
        );
    }

    #[test]
    fn unknown_region_gets_per_table_sentinel() {
        assert_eq!(dispatch_update("alerts", "Kerala"), NO_ALERTS);
        assert_eq!(dispatch_update("schemes", "Kerala"), NO_SCHEMES);
        // The two tables must not share a sentinel.
        assert_ne!(NO_ALERTS, NO_SCHEMES);
    }

    #[test]
    fn faq_ignores_region() {
        let expected = FAQS.join("<br>");
        assert_eq!(dispatch_update("faq", "India"), expected);
        assert_eq!(dispatch_update("faq", "Telangana"), expected);
        assert_eq!(dispatch_update("faq", ""), expected);
    }

    #[test]
    fn unknown_type_gets_default_sentinel() {
        assert_eq!(dispatch_update("news", "Telangana"), NO_DATA);
        assert_eq!(dispatch_update("", "India"), NO_DATA);
        // Type matching stays case-sensitive.
        assert_eq!(dispatch_update("Alerts", "Telangana"), NO_DATA);
    }

    #[test]
    fn known_lookups_are_br_joined() {
        let alerts = dispatch_update("alerts", "telangana");
        assert!(alerts.contains("Dengue alert in Hyderabad."));
        assert_eq!(alerts.matches("<br>").count(), 2);
    }
}
