use serde::{Deserialize, Serialize};

/// Document-level metadata, harvested once per document.
///
/// All fields except `total_pages` come from the PDF info dictionary and
/// are coerced to strings, so the whole struct is JSON-primitive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub total_pages: usize,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub producer: String,
    #[serde(default)]
    pub creation_date: String,
    #[serde(default)]
    pub modification_date: String,
}

/// Plain text extracted from one page. Pages with no extractable text
/// produce no entry at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageText {
    pub page: usize,
    pub text: String,
}

/// One grid table reconstructed from a page. Cells may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageTable {
    pub page: usize,
    pub table_number: usize,
    pub data: Vec<Vec<Option<String>>>,
}

/// A positioned text run: a single character or a short run of characters
/// placed by one text-showing operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    pub text: String,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGlyphs {
    pub page: usize,
    pub characters: Vec<Glyph>,
}

/// A straight vector segment from the page's drawing operators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentLine {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLines {
    pub page: usize,
    pub lines: Vec<SegmentLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRects {
    pub page: usize,
    pub rectangles: Vec<RectShape>,
}

/// A free-text note attached to a page, independent of the text stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub page: usize,
    #[serde(rename = "type")]
    pub subtype: String,
    pub content: String,
    pub rect: Vec<f64>,
    pub name: String,
}

/// Everything harvested from one document. Read-only once produced; this
/// is the raw-extraction artifact persisted between stages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HarvestResult {
    pub metadata: DocumentMetadata,
    pub text_content: Vec<PageText>,
    pub tables: Vec<PageTable>,
    pub annotations: Vec<Annotation>,
    pub coordinates_data: Vec<PageGlyphs>,
    #[serde(default)]
    pub lines: Vec<PageLines>,
    #[serde(default)]
    pub rectangles: Vec<PageRects>,
}

impl HarvestResult {
    /// All page text concatenated in page order, used by the scans that
    /// operate on the whole document.
    pub fn full_text(&self) -> String {
        let mut out = String::new();
        for pt in &self.text_content {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&pt.text);
        }
        out
    }
}

/// A horizontal text run reconstructed from coordinate-clustered glyphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateLine {
    pub y_coordinate: i64,
    pub text: String,
    pub page: usize,
}

/// Derived piping analysis: the second persisted artifact and the input to
/// classification and table assembly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipingAnalysis {
    /// Pipe size/dimension notations found in page text, in match order.
    pub dimensions: Vec<String>,
    /// Cleaned, deduplicated candidate tag strings (first occurrence wins).
    pub annotations_text: Vec<String>,
    /// Reconstructed coordinate-clustered text runs.
    pub coordinate_patterns: Vec<CoordinateLine>,
}

/// A secondary detail record: specification values or connectivity text
/// pulled from the text window following a recognized tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub component_id: String,
    pub category: DetailCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DetailRecord {
    pub fn new(component_id: impl Into<String>, category: DetailCategory) -> Self {
        DetailRecord {
            component_id: component_id.into(),
            category,
            flow: None,
            pressure: None,
            temperature: None,
            rpm: None,
            description: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailCategory {
    Equipment,
    Line,
    Note,
}

impl std::fmt::Display for DetailCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailCategory::Equipment => write!(f, "Equipment"),
            DetailCategory::Line => write!(f, "Line"),
            DetailCategory::Note => write!(f, "Note"),
        }
    }
}
