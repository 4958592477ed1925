use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Substrings that disqualify a Line # candidate (upper-cased containment
/// test). These are prose connectives and drawing-metadata words that
/// satisfy the loose line pattern without being piping line numbers.
const SKIP_KEYWORDS: &[&str] = &[
    "TO ", "FROM ", "HOT OIL", "TRIM", "AS-BUILT", "UPDATE", "FILTER", "DWG", "REV", "SHEET",
];

static LINE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(P|RO|MS|HS)-\d+").expect("valid pattern"));

/// Second-pass cleanup of the Line # category.
///
/// Keeps a candidate only if it carries no disqualifying keyword and
/// either starts with a recognized line prefix or contains a quotation
/// mark (pipe-size notation). Survivors are deduplicated first-wins, in
/// insertion order, matching the dedup policy of the rest of the
/// pipeline.
pub fn filter_line_numbers(lines: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut cleaned = Vec::new();

    for line in lines {
        let upper = line.to_uppercase();
        if SKIP_KEYWORDS.iter().any(|kw| upper.contains(kw)) {
            continue;
        }
        if !LINE_PREFIX.is_match(line) && !line.contains('"') {
            continue;
        }
        if seen.insert(line.clone()) {
            cleaned.push(line.clone());
        }
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_prose_fragment_rejected() {
        let out = filter_line_numbers(&lines(&["TO F-78 HOT OIL TRIM"]));
        assert!(out.is_empty());
    }

    #[test]
    fn test_line_number_with_size_retained() {
        let out = filter_line_numbers(&lines(&["P-6682-4\"-CDH5"]));
        assert_eq!(out, vec!["P-6682-4\"-CDH5".to_string()]);
    }

    #[test]
    fn test_revision_stamp_rejected() {
        let out = filter_line_numbers(&lines(&["P-1001 REV 3", "MS-14 SHEET 2 OF 5"]));
        assert!(out.is_empty());
    }

    #[test]
    fn test_quote_without_prefix_retained() {
        let out = filter_line_numbers(&lines(&["6\"-CDH5-1122"]));
        assert_eq!(out, vec!["6\"-CDH5-1122".to_string()]);
    }

    #[test]
    fn test_dedup_first_wins_keeps_order() {
        let out = filter_line_numbers(&lines(&[
            "RO-17-6\"-CS",
            "P-6682-4\"-CDH5",
            "RO-17-6\"-CS",
        ]));
        assert_eq!(
            out,
            vec!["RO-17-6\"-CS".to_string(), "P-6682-4\"-CDH5".to_string()]
        );
    }
}
