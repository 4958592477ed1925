use crate::classify::line_filter;
use crate::classify::patterns::PatternTable;
use crate::classify::taxonomy::Category;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Category -> candidate tag sequence, in order encountered.
///
/// Classification is a partition: a candidate lands in at most one
/// category (first-match-wins across the table). Candidates matching
/// nothing are omitted.
pub type ClassifiedRegistry = BTreeMap<Category, Vec<String>>;

/// Process-unit keywords that route otherwise-unmatched strings to the
/// Drawing_Name bucket.
const DRAWING_NAME_KEYWORDS: &[&str] = &["DELAYED COKER", "FURNACE"];

static PID_FALLBACK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-DA-\d{3}-\d{3}").expect("valid pattern"));

/// Classify candidate tag strings against the pattern table.
///
/// Each candidate is tested against the table's categories in priority
/// order; the first matching category claims it. Candidates the table
/// rejects get two fallback checks: process-unit keywords route to
/// Drawing_Name, and a leading drawing-number token routes to PID #.
/// The Line # sequence then goes through the post-filter.
pub fn classify(candidates: &[String], table: &PatternTable) -> ClassifiedRegistry {
    let mut registry = ClassifiedRegistry::new();

    for raw in candidates {
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }

        if let Some(category) = table.first_match(text) {
            registry.entry(category).or_default().push(text.to_string());
            continue;
        }

        let upper = text.to_uppercase();
        if DRAWING_NAME_KEYWORDS.iter().any(|kw| upper.contains(kw)) {
            registry
                .entry(Category::DrawingName)
                .or_default()
                .push(text.to_string());
        } else if PID_FALLBACK.is_match(text) {
            registry
                .entry(Category::Pid)
                .or_default()
                .push(text.to_string());
        }
    }

    if let Some(lines) = registry.get_mut(&Category::LineNumber) {
        *lines = line_filter::filter_line_numbers(lines);
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partition_no_candidate_in_two_categories() {
        let input = candidates(&["FT-101", "PT-205A", "102-DA-111-002", "PSV-33", "P-10226"]);
        let registry = classify(&input, PatternTable::builtin());

        for tag in &input {
            let holders = registry
                .values()
                .filter(|seq| seq.contains(tag))
                .count();
            assert!(holders <= 1, "{tag} appears in {holders} categories");
        }
    }

    #[test]
    fn test_priority_pt_tag_is_transmitter_not_equipment() {
        let registry = classify(&candidates(&["PT-101"]), PatternTable::builtin());
        assert_eq!(
            registry.get(&Category::PressureTransmitter),
            Some(&vec!["PT-101".to_string()])
        );
        assert!(registry.get(&Category::Equipment).is_none());
    }

    #[test]
    fn test_annotation_scenario() {
        // Normalizer output for ["FT-101", "FT-101", "  ", "PT-205A",
        // "102-DA-111-002"] is three candidates; classification buckets
        // each into exactly one category.
        let input = candidates(&["FT-101", "PT-205A", "102-DA-111-002"]);
        let registry = classify(&input, PatternTable::builtin());

        assert_eq!(
            registry.get(&Category::FlowTransmitter),
            Some(&vec!["FT-101".to_string()])
        );
        assert_eq!(
            registry.get(&Category::PressureTransmitter),
            Some(&vec!["PT-205A".to_string()])
        );
        assert_eq!(
            registry.get(&Category::Pid),
            Some(&vec!["102-DA-111-002".to_string()])
        );
    }

    #[test]
    fn test_drawing_name_fallback() {
        let registry = classify(
            &candidates(&["DELAYED COKER UNIT NOTES"]),
            PatternTable::builtin(),
        );
        assert_eq!(
            registry.get(&Category::DrawingName),
            Some(&vec!["DELAYED COKER UNIT NOTES".to_string()])
        );
    }

    #[test]
    fn test_unmatched_candidate_is_omitted() {
        let registry = classify(&candidates(&["SEE NOTE 4"]), PatternTable::builtin());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_blank_candidates_skipped() {
        let registry = classify(&candidates(&["  ", ""]), PatternTable::builtin());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let registry = classify(
            &candidates(&["FT-300", "FT-100", "FT-200"]),
            PatternTable::builtin(),
        );
        assert_eq!(
            registry.get(&Category::FlowTransmitter),
            Some(&vec![
                "FT-300".to_string(),
                "FT-100".to_string(),
                "FT-200".to_string()
            ])
        );
    }

    #[test]
    fn test_line_post_filter_applied() {
        // RO- with a dash suffix matches the Line # family, but prose
        // containing "TO " is dropped by the post-filter.
        let registry = classify(
            &candidates(&["RO-17-6\"-CS", "MS-40-2\" TO FLARE"]),
            PatternTable::builtin(),
        );
        assert_eq!(
            registry.get(&Category::LineNumber),
            Some(&vec!["RO-17-6\"-CS".to_string()])
        );
    }
}
