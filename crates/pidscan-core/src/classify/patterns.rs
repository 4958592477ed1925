use crate::classify::taxonomy::Category;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// One category's pattern list. Patterns are tried in declared order.
#[derive(Debug)]
pub struct CategoryRule {
    pub category: Category,
    pub patterns: Vec<Regex>,
}

/// The ordered category -> pattern-list table.
///
/// Declaration order is the classification priority: tag families overlap
/// syntactically, and the *first* category whose pattern matches claims
/// the candidate. Reordering the table changes output, so the order is
/// part of the contract. The table is immutable after construction and
/// injected into the classifier, which makes alternative tables trivial
/// to test.
#[derive(Debug)]
pub struct PatternTable {
    rules: Vec<CategoryRule>,
}

impl PatternTable {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        PatternTable { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// The standard P&ID tag table.
    pub fn builtin() -> &'static PatternTable {
        &BUILTIN_TABLE
    }

    /// Return the first category whose pattern list matches `text`
    /// (case-insensitive substring search), or None.
    pub fn first_match(&self, text: &str) -> Option<Category> {
        for rule in &self.rules {
            if rule.patterns.iter().any(|p| p.is_match(text)) {
                return Some(rule.category);
            }
        }
        None
    }
}

fn rule(category: Category, patterns: &[&str]) -> CategoryRule {
    let compiled = patterns
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .unwrap_or_else(|e| panic!("invalid builtin pattern '{p}': {e}"))
        })
        .collect();
    CategoryRule {
        category,
        patterns: compiled,
    }
}

static BUILTIN_TABLE: LazyLock<PatternTable> = LazyLock::new(|| {
    PatternTable::new(vec![
        rule(
            Category::Equipment,
            &[
                // Basic single-letter equipment tags (pump/motor/exchanger/
                // fan/vessel/compressor/heater classes)
                r"\b(P|M|E|F|V|C|H)-\d{3,6}[A-Z]?\b",
                // Composite pipe/equipment tags with size/material suffix
                r#"\bP-\d{3,6}(?:-\d+)?(?:[A-Z0-9"~\-]+)?\b"#,
                r"\bM-\d+[A-Z]?\b",
                r"\bE-\d+[A-Z]?\b",
                r"\bV-\d+[A-Z]?\b",
                r"\bC-\d+[A-Z]?\b",
                r"\bH-\d+[A-Z]?\b",
            ],
        ),
        rule(Category::Pid, &[r"\b\d{2,3}-DA-\d{3}-\d{3}\b"]),
        rule(
            Category::LineNumber,
            &[
                // P-6682-4"-CDH5 style line numbers
                r#"\bP-\d{3,6}(?:-\d+)?["]?-?[A-Z0-9"~\-\(\)]*[A-Z]{1,3}\b"#,
                r#"\bRO-\d+.*["-].*\b"#,
                r#"\bMS-\d+.*["-].*\b"#,
                r#"\bHS-\d+.*["-].*\b"#,
            ],
        ),
        rule(Category::FlowElement, &[r"\bFE-\d+[A-Z]?\b", r"\d+-FE-\d+"]),
        rule(Category::FlowIndicator, &[r"\bFI-\d+[A-Z]?\b", r"\d+-FI-\d+"]),
        rule(Category::FlowTransmitter, &[r"\bFT-\d+[A-Z]?\b", r"\d+-FT-\d+"]),
        rule(
            Category::PressureGauge,
            &[r"\bPG-\d+[A-Z]?\b", r"\bPI-\d+[A-Z]?\b", r"\d+-PG-\d+", r"\d+-PI-\d+"],
        ),
        rule(Category::PressureTransmitter, &[r"\bPT-\d+[A-Z]?\b", r"\d+-PT-\d+"]),
        rule(
            Category::Psv,
            &[r"\bPSV-\d+[A-Z]?\b", r"\bPRV-\d+[A-Z]?\b", r"\d+-PSV-\d+"],
        ),
        rule(Category::TemperatureElement, &[r"\bTE-\d+[A-Z]?\b", r"\d+-TE-\d+"]),
        rule(
            Category::TemperatureTransmitter,
            &[r"\bTT-\d+[A-Z]?\b", r"\d+-TT-\d+"],
        ),
        rule(
            Category::LevelGauge,
            &[r"\bLG-\d+[A-Z]?\b", r"\bLI-\d+[A-Z]?\b", r"\d+-LG-\d+"],
        ),
        rule(Category::LevelTransmitter, &[r"\bLT-\d+[A-Z]?\b", r"\d+-LT-\d+"]),
        rule(
            Category::ControlValve,
            &[
                r"\bCV-\d+[A-Z]?\b",
                r"\bHV-\d+[A-Z]?\b",
                r"\bPV-\d+[A-Z]?\b",
                r"\bFV-\d+[A-Z]?\b",
                r"\d+-CV-\d+",
            ],
        ),
        rule(Category::HighSwitch, &[r"\bHS-\d+[A-Z]?\b", r"\d+-HS-\d+"]),
        rule(Category::Ipf, &[r"\bIPF-\d+[A-Z]?\b"]),
        rule(Category::Orifice, &[r"\bFO-\d+[A-Z]?\b", r"\bOR-\d+[A-Z]?\b"]),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_priority_order() {
        let cats: Vec<Category> = PatternTable::builtin()
            .rules()
            .iter()
            .map(|r| r.category)
            .collect();
        assert_eq!(cats[0], Category::Equipment);
        assert_eq!(cats[1], Category::Pid);
        assert_eq!(cats[2], Category::LineNumber);
        assert_eq!(*cats.last().unwrap(), Category::Orifice);
    }

    #[test]
    fn test_instrument_prefixes() {
        let table = PatternTable::builtin();
        assert_eq!(table.first_match("FT-101"), Some(Category::FlowTransmitter));
        assert_eq!(
            table.first_match("PT-205A"),
            Some(Category::PressureTransmitter)
        );
        assert_eq!(table.first_match("PSV-33"), Some(Category::Psv));
        assert_eq!(table.first_match("PRV-12"), Some(Category::Psv));
        assert_eq!(table.first_match("FV-250"), Some(Category::ControlValve));
        assert_eq!(table.first_match("FO-17"), Some(Category::Orifice));
    }

    #[test]
    fn test_loop_number_prefix() {
        let table = PatternTable::builtin();
        assert_eq!(
            table.first_match("10-FT-1234"),
            Some(Category::FlowTransmitter)
        );
    }

    #[test]
    fn test_equipment_boundary_does_not_eat_instruments() {
        // "PT-101" must not satisfy the P- equipment pattern: the P is
        // followed by T, so no \bP- boundary exists inside the tag.
        let table = PatternTable::builtin();
        assert_eq!(
            table.first_match("PT-101"),
            Some(Category::PressureTransmitter)
        );
        assert_eq!(table.first_match("FE-202"), Some(Category::FlowElement));
    }

    #[test]
    fn test_case_insensitive() {
        let table = PatternTable::builtin();
        assert_eq!(table.first_match("ft-101"), Some(Category::FlowTransmitter));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(PatternTable::builtin().first_match("GENERAL NOTES"), None);
    }

    #[test]
    fn test_drawing_identifier() {
        assert_eq!(
            PatternTable::builtin().first_match("102-DA-111-002"),
            Some(Category::Pid)
        );
    }

    #[test]
    fn test_plain_high_switch_not_a_line() {
        // HS- without a quote/dash suffix is a switch, not a line number.
        assert_eq!(
            PatternTable::builtin().first_match("HS-101"),
            Some(Category::HighSwitch)
        );
    }
}
