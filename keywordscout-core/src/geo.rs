use crate::error::CoreError;

/// Language constant id for English, used as the fixed request language.
pub const ENGLISH_LANGUAGE_ID: &str = "1000";

/// Supported target countries and their Google Ads geo target constant ids.
/// This table is the sole way a country resolves; an absent entry means the
/// country cannot be targeted.
pub const COUNTRIES: &[(&str, &str)] = &[
    ("United States", "2840"),
    ("India", "2356"),
    ("Canada", "2124"),
    ("United Kingdom", "2826"),
    ("Australia", "2036"),
    ("Indonesia", "2052"),
    ("Bangladesh", "1236"),
    ("Pakistan", "1780"),
    ("Japan", "2392"),
    ("Vietnam", "2390"),
];

/// Country display names in selection order.
pub fn country_names() -> Vec<&'static str> {
    COUNTRIES.iter().map(|(name, _)| *name).collect()
}

/// Resolve a country display name to its geo target id. Unmapped names are
/// an error, never a silent default.
pub fn geo_target_id(country: &str) -> Result<&'static str, CoreError> {
    COUNTRIES
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, id)| *id)
        .ok_or_else(|| CoreError::UnknownCountry {
            name: country.to_string(),
        })
}
