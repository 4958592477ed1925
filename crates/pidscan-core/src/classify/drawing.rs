use crate::model::PageText;
use regex::Regex;
use std::sync::LazyLock;

/// Returned when no page carries a recognizable drawing title.
pub const UNKNOWN_DRAWING: &str = "Unknown Drawing";

/// Title words that mark a drawing-number suffix as a real drawing title
/// rather than a cross-reference to another sheet.
const TITLE_KEYWORDS: &[&str] = &[
    "UNIT", "SYSTEM", "FURNACE", "PUMP", "VESSEL", "TOWER", "REACTOR",
];

static DRAWING_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    // Drawing number token, an optional dash separator, then the rest of
    // the line as the title.
    Regex::new(r"\b(\d{2,3}-DA-\d{3}-\d{3})\b[ \t]*-?[ \t]*([^\r\n]*)").expect("valid pattern")
});

/// Scan page text in page order for a drawing-number + title pair and
/// label the document with the first one found.
///
/// The search stops at the first match; later pages are not scanned.
pub fn resolve_drawing_name(pages: &[PageText]) -> String {
    for page in pages {
        for caps in DRAWING_TITLE.captures_iter(&page.text) {
            let number = &caps[1];
            let title = caps[2].trim();
            let upper = title.to_uppercase();
            if !title.is_empty() && TITLE_KEYWORDS.iter().any(|kw| upper.contains(kw)) {
                return format!("{number} - {title}");
            }
        }
    }
    UNKNOWN_DRAWING.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: usize, text: &str) -> PageText {
        PageText {
            page: n,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_resolves_number_and_title() {
        let pages = vec![page(
            1,
            "102-DA-111-001 - DELAYED COKER UNIT FURNACE CHARGE PUMPS",
        )];
        assert_eq!(
            resolve_drawing_name(&pages),
            "102-DA-111-001 - DELAYED COKER UNIT FURNACE CHARGE PUMPS"
        );
    }

    #[test]
    fn test_no_match_returns_placeholder() {
        let pages = vec![page(1, "GENERAL NOTES\nREVISION 3")];
        assert_eq!(resolve_drawing_name(&pages), UNKNOWN_DRAWING);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(resolve_drawing_name(&[]), UNKNOWN_DRAWING);
    }

    #[test]
    fn test_first_match_wins_across_pages() {
        let pages = vec![
            page(1, "nothing here"),
            page(2, "102-DA-111-001 - FURNACE CHARGE PUMPS"),
            page(3, "102-DA-222-001 - VESSEL OVERHEADS"),
        ];
        assert_eq!(
            resolve_drawing_name(&pages),
            "102-DA-111-001 - FURNACE CHARGE PUMPS"
        );
    }

    #[test]
    fn test_number_without_title_keyword_skipped() {
        // A bare cross-reference on page 1 must not shadow the titled
        // match on page 2.
        let pages = vec![
            page(1, "SEE 102-DA-111-009 - CONTINUATION"),
            page(2, "102-DA-111-001 - DELAYED COKER UNIT"),
        ];
        assert_eq!(
            resolve_drawing_name(&pages),
            "102-DA-111-001 - DELAYED COKER UNIT"
        );
    }
}
