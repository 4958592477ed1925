pub mod cluster;
pub mod normalize;

use crate::model::{HarvestResult, PipingAnalysis};
use regex::Regex;
use std::sync::LazyLock;

/// Pipe size and dimension notations found in drawing text.
static DIMENSION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"\b\d+"?\s*[xX×]\s*\d+"?\b"#, // 6" x 4"
        r"\bPipe\s*\d+\b",
        r"\bP-\d+\b",
        r#"\b\d+"\s*Ø\b"#,
        r"\bDN\s*\d+\b",
        r"\bNPS\s*\d+\b",
    ]
    .iter()
    .map(|p| {
        regex::RegexBuilder::new(p)
            .case_insensitive(true)
            .build()
            .expect("valid dimension pattern")
    })
    .collect()
});

/// Derive the piping analysis from a harvest: dimension notations from
/// page text, candidate tags from annotations, and coordinate-clustered
/// text runs from the glyph data.
pub fn analyze_piping(harvest: &HarvestResult) -> PipingAnalysis {
    let mut dimensions = Vec::new();
    for page_text in &harvest.text_content {
        for pattern in DIMENSION_PATTERNS.iter() {
            for m in pattern.find_iter(&page_text.text) {
                dimensions.push(m.as_str().to_string());
            }
        }
    }

    PipingAnalysis {
        dimensions,
        annotations_text: normalize::candidate_tags(&harvest.annotations),
        coordinate_patterns: cluster::reconstruct_lines(&harvest.coordinates_data),
    }
}
