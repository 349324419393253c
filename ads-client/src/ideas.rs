use crate::api::KeywordIdea;
use keywordscout_core::KeywordRecord;
use tracing::debug;

/// Long-tail filter: keep suggestions with at least 3 whitespace-delimited
/// tokens. Punctuation is not treated specially.
pub fn is_long_tail(text: &str) -> bool {
    text.split_whitespace().count() >= 3
}

/// Convert a bid in micro-currency units to USD, rounded half-up to 2
/// decimal places: 1_500_000 -> 1.50, 999_999 -> 1.00.
pub fn micros_to_usd(micros: u64) -> f64 {
    ((micros as f64 / 1_000_000.0) * 100.0).round() / 100.0
}

/// Shape raw idea records into a result set: drop short-tail suggestions,
/// sort by monthly searches descending (stable, so upstream order breaks
/// ties), truncate to the requested limit.
pub fn shape_results(ideas: Vec<KeywordIdea>, result_limit: usize) -> Vec<KeywordRecord> {
    let total = ideas.len();
    let mut records: Vec<KeywordRecord> = ideas
        .into_iter()
        .filter(|idea| is_long_tail(&idea.text))
        .map(|idea| {
            let metrics = idea.keyword_idea_metrics.unwrap_or_default();
            KeywordRecord {
                keyword: idea.text,
                cpc_usd: micros_to_usd(metrics.high_top_of_page_bid_micros),
                competition: metrics.competition,
                monthly_searches: metrics.avg_monthly_searches,
            }
        })
        .collect();

    records.sort_by(|a, b| b.monthly_searches.cmp(&a.monthly_searches));
    records.truncate(result_limit);

    debug!(
        "Shaped {} of {} idea records (limit {})",
        records.len(),
        total,
        result_limit
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::KeywordIdeaMetrics;
    use keywordscout_core::Competition;

    fn idea(text: &str, searches: u64, bid_micros: u64) -> KeywordIdea {
        KeywordIdea {
            text: text.to_string(),
            keyword_idea_metrics: Some(KeywordIdeaMetrics {
                avg_monthly_searches: searches,
                high_top_of_page_bid_micros: bid_micros,
                competition: Competition::Medium,
            }),
        }
    }

    #[test]
    fn test_long_tail_filter() {
        assert!(is_long_tail("best eco office chairs"));
        assert!(is_long_tail("one two three"));
        assert!(!is_long_tail("office chairs"));
        assert!(!is_long_tail("chairs"));
        assert!(!is_long_tail(""));
        // Whitespace-only splitting; punctuation is not a separator
        assert!(!is_long_tail("eco-office,chairs"));
        assert!(is_long_tail("  spaced   out   tokens  "));
    }

    #[test]
    fn test_micros_conversion_rounds_half_up() {
        assert_eq!(micros_to_usd(1_500_000), 1.50);
        assert_eq!(micros_to_usd(999_999), 1.00);
        assert_eq!(micros_to_usd(0), 0.00);
        assert_eq!(micros_to_usd(125_000), 0.13);
        assert_eq!(micros_to_usd(2_345_678), 2.35);
    }

    #[test]
    fn test_shape_filters_sorts_and_truncates() {
        let ideas = vec![
            idea("short one", 9999, 100_000),
            idea("best green office chairs", 880, 1_500_000),
            idea("eco friendly desk setup", 2400, 750_000),
            idea("standing desk mat reviews", 880, 500_000),
            idea("cheap office plants online", 50, 250_000),
        ];

        let records = shape_results(ideas, 3);
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| is_long_tail(&r.keyword)));

        // Descending by monthly searches
        assert_eq!(records[0].keyword, "eco friendly desk setup");
        for pair in records.windows(2) {
            assert!(pair[0].monthly_searches >= pair[1].monthly_searches);
        }

        // Ties keep upstream relative order (stable sort)
        assert_eq!(records[1].keyword, "best green office chairs");
        assert_eq!(records[2].keyword, "standing desk mat reviews");
    }

    #[test]
    fn test_shape_defaults_missing_metrics() {
        let ideas = vec![KeywordIdea {
            text: "quiet home office ideas".to_string(),
            keyword_idea_metrics: None,
        }];

        let records = shape_results(ideas, 10);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].monthly_searches, 0);
        assert_eq!(records[0].cpc_usd, 0.0);
        assert_eq!(records[0].competition, Competition::Unspecified);
    }

    #[test]
    fn test_limit_bounds_result_set() {
        let ideas: Vec<KeywordIdea> = (0..200)
            .map(|i| idea(&format!("keyword idea number {i}"), i, 1_000_000))
            .collect();

        let records = shape_results(ideas, 50);
        assert_eq!(records.len(), 50);
        assert_eq!(records[0].monthly_searches, 199);
    }
}
