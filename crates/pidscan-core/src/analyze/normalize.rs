use crate::model::Annotation;
use std::collections::HashSet;

/// Clean one annotation content string.
///
/// Strips byte-order-mark artifacts that annotation tools leave behind
/// (both the real U+FEFF and the literal "feff" text that survives a bad
/// round-trip), then trims whitespace.
fn clean_content(content: &str) -> String {
    content
        .replace('\u{feff}', "")
        .replace("\\ufeff", "")
        .replace("feff", "")
        .trim()
        .to_string()
}

/// Turn the harvested annotation list into an ordered, deduplicated
/// candidate tag list. First occurrence wins; empty and whitespace-only
/// contents are dropped.
pub fn candidate_tags(annotations: &[Annotation]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for annotation in annotations {
        let cleaned = clean_content(&annotation.content);
        if cleaned.is_empty() {
            continue;
        }
        if seen.insert(cleaned.clone()) {
            out.push(cleaned);
        }
    }

    out
}
