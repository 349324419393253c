use serde::{Deserialize, Serialize};

pub const MIN_RESULT_LIMIT: u32 = 50;
pub const MAX_RESULT_LIMIT: u32 = 1000;
pub const RESULT_LIMIT_STEP: u32 = 50;
pub const DEFAULT_RESULT_LIMIT: u32 = 300;

/// One keyword-research submission. Built fresh per "Generate" action and
/// discarded once the fetch completes.
#[derive(Debug, Clone)]
pub struct KeywordQuery {
    pub seed_url: String,
    pub seed_keywords: Vec<String>,
    pub country: String,
    pub result_limit: usize,
}

impl KeywordQuery {
    pub fn new(
        seed_url: impl Into<String>,
        seed_keywords: Vec<String>,
        country: impl Into<String>,
        result_limit: usize,
    ) -> Result<Self, crate::CoreError> {
        let seed_url = seed_url.into();
        if seed_url.trim().is_empty() {
            return Err(crate::CoreError::InvalidInput {
                message: "seed URL or concept must not be empty".to_string(),
            });
        }
        Ok(Self {
            seed_url,
            seed_keywords,
            country: country.into(),
            result_limit,
        })
    }
}

/// Competition level reported by the keyword-ideas service. Values the
/// service may add later collapse to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Competition {
    Low,
    Medium,
    High,
    #[default]
    Unspecified,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for Competition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Competition::Low => "LOW",
            Competition::Medium => "MEDIUM",
            Competition::High => "HIGH",
            Competition::Unspecified => "UNSPECIFIED",
            Competition::Unknown => "UNKNOWN",
        };
        write!(f, "{name}")
    }
}

/// One long-tail keyword suggestion with its advertising metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordRecord {
    pub keyword: String,
    pub cpc_usd: f64,
    pub competition: Competition,
    pub monthly_searches: u64,
}

/// Split a comma-separated seed keyword field into individual seeds,
/// trimming surrounding whitespace and dropping empty entries.
pub fn parse_seed_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_keywords() {
        let seeds = parse_seed_keywords("eco office, green workspace");
        assert_eq!(seeds, vec!["eco office", "green workspace"]);

        assert!(parse_seed_keywords("").is_empty());
        assert!(parse_seed_keywords(" , ,").is_empty());
        assert_eq!(parse_seed_keywords("solo"), vec!["solo"]);
    }

    #[test]
    fn test_query_rejects_empty_seed() {
        let result = KeywordQuery::new("   ", vec![], "United States", 300);
        assert!(result.is_err());

        let query = KeywordQuery::new("example.com", vec![], "India", 300).unwrap();
        assert_eq!(query.seed_url, "example.com");
        assert_eq!(query.result_limit, 300);
    }

    #[test]
    fn test_competition_from_upstream_enum() {
        let parsed: Competition = serde_json::from_str("\"HIGH\"").unwrap();
        assert_eq!(parsed, Competition::High);

        let parsed: Competition = serde_json::from_str("\"UNSPECIFIED\"").unwrap();
        assert_eq!(parsed, Competition::Unspecified);

        // Enum values added upstream must not break parsing
        let parsed: Competition = serde_json::from_str("\"EXTREME\"").unwrap();
        assert_eq!(parsed, Competition::Unknown);

        assert_eq!(Competition::Medium.to_string(), "MEDIUM");
    }
}
