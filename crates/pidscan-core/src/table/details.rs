use crate::model::{DetailCategory, DetailRecord, HarvestResult};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Forward text window searched after each recognized tag.
const DETAIL_WINDOW: usize = 250;

static EQUIPMENT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[PMEFVCH]-\d{3,6}[A-Z]?\b").expect("valid pattern"));

static DRAWING_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{2,3}-DA-\d{3}-\d{3}\b").expect("valid pattern"));

static FLOW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[\d,]+(?:\.\d+)?\s*(?:GPM|LPM)\b").expect("valid pattern"));

static PRESSURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[\d,]+(?:\.\d+)?\s*(?:PSI|bar)\b").expect("valid pattern"));

static TEMPERATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d,]+(?:\.\d+)?\s*°\s*[FC]\b").expect("valid pattern"));

static RPM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[\d,]+(?:\.\d+)?\s*RPM\b").expect("valid pattern"));

static TO_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bTO\s+[A-Z0-9][A-Z0-9 \-"]{0,40}"#).expect("valid pattern"));

static FROM_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bFROM\s+[A-Z0-9][A-Z0-9 \-"]{0,40}"#).expect("valid pattern"));

/// Best-effort secondary pass: for each equipment tag and drawing token
/// in the concatenated document text, pull specification values and
/// connectivity phrases from the text window that follows it. Missing
/// values are omitted fields, never errors.
pub fn extract_details(harvest: &HarvestResult) -> Vec<DetailRecord> {
    let text = harvest.full_text();
    let mut records = Vec::new();

    let mut seen = HashSet::new();
    for m in EQUIPMENT_TAG.find_iter(&text) {
        let tag = m.as_str();
        if !seen.insert(tag.to_string()) {
            continue;
        }
        let window = forward_window(&text, m.end());
        let mut record = DetailRecord::new(tag, DetailCategory::Equipment);
        record.flow = FLOW.find(window).map(|v| v.as_str().trim().to_string());
        record.pressure = PRESSURE.find(window).map(|v| v.as_str().trim().to_string());
        record.temperature = TEMPERATURE
            .find(window)
            .map(|v| v.as_str().trim().to_string());
        record.rpm = RPM.find(window).map(|v| v.as_str().trim().to_string());
        records.push(record);
    }

    let mut seen_tokens = HashSet::new();
    for m in DRAWING_TOKEN.find_iter(&text) {
        let token = m.as_str();
        if !seen_tokens.insert(token.to_string()) {
            continue;
        }
        let window = forward_window(&text, m.end());
        let mut record = DetailRecord::new(token, DetailCategory::Line);
        record.description = Some(connectivity_description(window));
        records.push(record);
    }

    records
}

/// Synthesize a connectivity description from directional phrases in the
/// window, falling back to a generic label when neither appears.
fn connectivity_description(window: &str) -> String {
    let from = FROM_PHRASE.find(window).map(|m| m.as_str().trim().to_string());
    let to = TO_PHRASE
        .find(window)
        .map(|m| m.as_str().trim().to_string())
        // A "FROM X TO Y" phrase already carries its TO part.
        .filter(|to| from.as_deref().map_or(true, |f| !f.contains(to.as_str())));

    match (from, to) {
        (Some(f), Some(t)) => format!("{f} {t}"),
        (Some(f), None) => f,
        (None, Some(t)) => t,
        (None, None) => "Process Line".to_string(),
    }
}

fn forward_window(text: &str, start: usize) -> &str {
    let mut end = (start + DETAIL_WINDOW).min(text.len());
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }
    &text[start..end]
}
