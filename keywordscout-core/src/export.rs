use crate::types::KeywordRecord;
use std::borrow::Cow;

/// Fixed download filename for exported result sets.
pub const CSV_FILE_NAME: &str = "keywords.csv";

/// Header row of the exported table.
pub const CSV_HEADER: &str = "Keyword,CPC (USD),Competition,Monthly Searches";

/// Render a result set as CSV, header row included. Columns mirror the
/// on-screen table exactly; no transformation beyond formatting.
pub fn to_csv(records: &[KeywordRecord]) -> String {
    let mut out = String::with_capacity(records.len() * 48 + CSV_HEADER.len() + 1);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&escape_field(&record.keyword));
        out.push(',');
        out.push_str(&format!("{:.2}", record.cpc_usd));
        out.push(',');
        out.push_str(&record.competition.to_string());
        out.push(',');
        out.push_str(&record.monthly_searches.to_string());
        out.push('\n');
    }
    out
}

fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Competition;

    fn record(keyword: &str, cpc: f64, searches: u64) -> KeywordRecord {
        KeywordRecord {
            keyword: keyword.to_string(),
            cpc_usd: cpc,
            competition: Competition::Medium,
            monthly_searches: searches,
        }
    }

    #[test]
    fn test_header_and_column_count() {
        let csv = to_csv(&[record("best eco office chairs", 1.5, 880)]);
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), CSV_HEADER);

        let row = lines.next().unwrap();
        assert_eq!(row.split(',').count(), 4);
        assert_eq!(row, "best eco office chairs,1.50,MEDIUM,880");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_empty_result_set_is_header_only() {
        assert_eq!(to_csv(&[]), format!("{CSV_HEADER}\n"));
    }

    #[test]
    fn test_fields_with_commas_and_quotes_are_quoted() {
        let csv = to_csv(&[record("chairs, desks and \"more\"", 0.25, 10)]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "\"chairs, desks and \"\"more\"\"\",0.25,MEDIUM,10");
    }

    #[test]
    fn test_cpc_always_two_decimals() {
        let csv = to_csv(&[record("green workspace ideas list", 1.0, 0)]);
        assert!(csv.contains(",1.00,"));
    }
}
