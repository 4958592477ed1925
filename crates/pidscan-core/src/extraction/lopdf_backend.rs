use crate::error::PidscanError;
use crate::extraction::{primitive, tables, DocumentHarvester};
use crate::model::{
    Annotation, DocumentMetadata, Glyph, HarvestResult, PageGlyphs, PageLines, PageRects,
    PageTable, PageText, RectShape, SegmentLine,
};
use log::warn;
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::BTreeMap;

/// Document harvesting backend built on lopdf.
///
/// Walks each page's content stream to recover positioned glyphs and
/// vector primitives, pulls annotations from the page dictionaries and
/// metadata from the trailer. Every per-page and per-record failure is
/// logged and skipped so one bad object never aborts the harvest.
pub struct LopdfHarvester;

impl LopdfHarvester {
    pub fn new() -> Self {
        LopdfHarvester
    }
}

impl Default for LopdfHarvester {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentHarvester for LopdfHarvester {
    fn harvest(&self, pdf_bytes: &[u8]) -> Result<HarvestResult, PidscanError> {
        let doc =
            Document::load_mem(pdf_bytes).map_err(|e| PidscanError::DocumentOpen(e.to_string()))?;

        let pages = doc.get_pages();
        let mut result = HarvestResult {
            metadata: harvest_metadata(&doc, pages.len()),
            ..Default::default()
        };

        for (&page_num, &page_id) in &pages {
            let page = page_num as usize;

            match doc.extract_text(&[page_num]) {
                Ok(text) if !text.trim().is_empty() => {
                    result.text_content.push(PageText { page, text });
                }
                Ok(_) => {}
                Err(e) => warn!("page {page}: text extraction failed, skipping: {e}"),
            }

            match walk_content(&doc, page_id) {
                Ok(content) => {
                    if !content.glyphs.is_empty() {
                        for (i, data) in tables::reconstruct_tables(&content.glyphs)
                            .into_iter()
                            .enumerate()
                        {
                            result.tables.push(PageTable {
                                page,
                                table_number: i + 1,
                                data,
                            });
                        }
                        result.coordinates_data.push(PageGlyphs {
                            page,
                            characters: content.glyphs,
                        });
                    }
                    if !content.lines.is_empty() {
                        result.lines.push(PageLines {
                            page,
                            lines: content.lines,
                        });
                    }
                    if !content.rects.is_empty() {
                        result.rectangles.push(PageRects {
                            page,
                            rectangles: content.rects,
                        });
                    }
                }
                Err(e) => warn!("page {page}: content stream walk failed, skipping: {e}"),
            }

            harvest_annotations(&doc, page_id, page, &mut result.annotations);
        }

        Ok(result)
    }

    fn backend_name(&self) -> &str {
        "lopdf"
    }
}

fn harvest_metadata(doc: &Document, total_pages: usize) -> DocumentMetadata {
    let mut metadata = DocumentMetadata {
        total_pages,
        ..Default::default()
    };

    if let Ok(info) = doc.trailer.get(b"Info") {
        if let Object::Dictionary(dict) = primitive::deref(doc, info) {
            metadata.title = meta_string(doc, dict, b"Title");
            metadata.author = meta_string(doc, dict, b"Author");
            metadata.subject = meta_string(doc, dict, b"Subject");
            metadata.creator = meta_string(doc, dict, b"Creator");
            metadata.producer = meta_string(doc, dict, b"Producer");
            metadata.creation_date = meta_string(doc, dict, b"CreationDate");
            metadata.modification_date = meta_string(doc, dict, b"ModDate");
        }
    }

    metadata
}

fn meta_string(doc: &Document, dict: &Dictionary, key: &[u8]) -> String {
    match dict.get(key) {
        Ok(obj) => match primitive::to_primitive(doc, obj) {
            serde_json::Value::String(s) => s,
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        },
        Err(_) => String::new(),
    }
}

fn harvest_annotations(doc: &Document, page_id: ObjectId, page: usize, out: &mut Vec<Annotation>) {
    let page_dict = match doc.get_dictionary(page_id) {
        Ok(d) => d,
        Err(e) => {
            warn!("page {page}: page dictionary unavailable: {e}");
            return;
        }
    };

    let annots = match page_dict.get(b"Annots") {
        Ok(obj) => primitive::deref(doc, obj),
        Err(_) => return,
    };
    let entries = match annots.as_array() {
        Ok(array) => array,
        Err(_) => return,
    };

    for entry in entries {
        let dict = match primitive::deref(doc, entry) {
            Object::Dictionary(d) => d,
            _ => {
                warn!("page {page}: annotation object could not be dereferenced, skipping");
                continue;
            }
        };

        let rect = dict
            .get(b"Rect")
            .ok()
            .map(|obj| primitive::deref(doc, obj))
            .and_then(|obj| obj.as_array().ok())
            .map(|array| array.iter().filter_map(as_f64).collect())
            .unwrap_or_default();

        out.push(Annotation {
            page,
            subtype: name_string(dict, b"Subtype"),
            content: string_value(doc, dict, b"Contents"),
            rect,
            name: string_value(doc, dict, b"NM"),
        });
    }
}

fn name_string(dict: &Dictionary, key: &[u8]) -> String {
    dict.get(key)
        .ok()
        .and_then(|obj| obj.as_name().ok())
        .map(|name| format!("/{}", String::from_utf8_lossy(name)))
        .unwrap_or_default()
}

fn string_value(doc: &Document, dict: &Dictionary, key: &[u8]) -> String {
    match dict.get(key).map(|obj| primitive::deref(doc, obj)) {
        Ok(Object::String(bytes, _)) => primitive::decode_bytes(bytes),
        _ => String::new(),
    }
}

fn as_f64(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(*r as f64),
        _ => None,
    }
}

struct PageContent {
    glyphs: Vec<Glyph>,
    lines: Vec<SegmentLine>,
    rects: Vec<RectShape>,
}

/// Walk a page's content stream, tracking the text and line matrices to
/// position each text-showing operator, and the current path point for
/// vector segments.
fn walk_content(doc: &Document, page_id: ObjectId) -> Result<PageContent, PidscanError> {
    let fonts = doc.get_page_fonts(page_id).unwrap_or_default();
    let content_data = doc
        .get_page_content(page_id)
        .map_err(|e| PidscanError::Extraction(e.to_string()))?;
    let content =
        Content::decode(&content_data).map_err(|e| PidscanError::Extraction(e.to_string()))?;

    let mut glyphs = Vec::new();
    let mut lines = Vec::new();
    let mut rects = Vec::new();

    let mut current_font = String::new();
    let mut font_size: f64 = 12.0;
    let mut text_matrix = [1.0f64, 0.0, 0.0, 1.0, 0.0, 0.0];
    let mut line_matrix = [1.0f64, 0.0, 0.0, 1.0, 0.0, 0.0];
    let mut in_text = false;

    let mut line_width: f64 = 0.0;
    let mut current_point: Option<(f64, f64)> = None;

    for op in &content.operations {
        match op.operator.as_str() {
            "BT" => {
                in_text = true;
                text_matrix = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];
                line_matrix = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];
            }
            "ET" => in_text = false,
            "Tf" => {
                if op.operands.len() >= 2 {
                    if let Ok(name) = op.operands[0].as_name() {
                        current_font = String::from_utf8_lossy(name).to_string();
                    }
                    if let Some(size) = as_f64(&op.operands[1]) {
                        font_size = size;
                    }
                }
            }
            "Td" | "TD" => {
                if op.operands.len() >= 2 {
                    line_matrix[4] += as_f64(&op.operands[0]).unwrap_or(0.0);
                    line_matrix[5] += as_f64(&op.operands[1]).unwrap_or(0.0);
                    text_matrix = line_matrix;
                }
            }
            "Tm" => {
                if op.operands.len() >= 6 {
                    for (i, operand) in op.operands.iter().take(6).enumerate() {
                        text_matrix[i] =
                            as_f64(operand).unwrap_or(if i == 0 || i == 3 { 1.0 } else { 0.0 });
                    }
                    line_matrix = text_matrix;
                }
            }
            "T*" => {
                line_matrix[5] -= font_size * 1.2;
                text_matrix = line_matrix;
            }
            "Tj" => {
                if in_text {
                    if let Some(operand) = op.operands.first() {
                        if let Some(text) = decode_operand(operand, doc, &fonts, &current_font) {
                            push_glyph(&mut glyphs, text, &text_matrix, font_size);
                        }
                    }
                }
            }
            "TJ" => {
                if in_text {
                    if let Some(Ok(array)) = op.operands.first().map(|o| o.as_array()) {
                        let mut combined = String::new();
                        for item in array {
                            if let Some(text) = decode_operand(item, doc, &fonts, &current_font) {
                                combined.push_str(&text);
                            }
                        }
                        push_glyph(&mut glyphs, combined, &text_matrix, font_size);
                    }
                }
            }
            "'" | "\"" => {
                line_matrix[5] -= font_size * 1.2;
                text_matrix = line_matrix;
                // The quote variants carry the string as the last operand.
                if let Some(operand) = op.operands.last() {
                    if let Some(text) = decode_operand(operand, doc, &fonts, &current_font) {
                        push_glyph(&mut glyphs, text, &text_matrix, font_size);
                    }
                }
            }
            "w" => {
                if let Some(width) = op.operands.first().and_then(as_f64) {
                    line_width = width;
                }
            }
            "m" => {
                if op.operands.len() >= 2 {
                    current_point = Some((
                        as_f64(&op.operands[0]).unwrap_or(0.0),
                        as_f64(&op.operands[1]).unwrap_or(0.0),
                    ));
                }
            }
            "l" => {
                if op.operands.len() >= 2 {
                    let x = as_f64(&op.operands[0]).unwrap_or(0.0);
                    let y = as_f64(&op.operands[1]).unwrap_or(0.0);
                    if let Some((px, py)) = current_point {
                        lines.push(SegmentLine {
                            x0: px,
                            y0: py,
                            x1: x,
                            y1: y,
                            width: line_width,
                        });
                    }
                    current_point = Some((x, y));
                }
            }
            "re" => {
                if op.operands.len() >= 4 {
                    let x = as_f64(&op.operands[0]).unwrap_or(0.0);
                    let y = as_f64(&op.operands[1]).unwrap_or(0.0);
                    let w = as_f64(&op.operands[2]).unwrap_or(0.0);
                    let h = as_f64(&op.operands[3]).unwrap_or(0.0);
                    rects.push(RectShape {
                        x0: x,
                        y0: y,
                        x1: x + w,
                        y1: y + h,
                        width: w,
                        height: h,
                    });
                }
            }
            _ => {}
        }
    }

    Ok(PageContent {
        glyphs,
        lines,
        rects,
    })
}

fn push_glyph(glyphs: &mut Vec<Glyph>, text: String, matrix: &[f64; 6], size: f64) {
    if text.trim().is_empty() {
        return;
    }
    let x0 = matrix[4];
    let y0 = matrix[5];
    // Glyph advance is approximated from the font size; lopdf does not
    // expose per-glyph widths here.
    let x1 = x0 + text.chars().count() as f64 * size * 0.5;
    glyphs.push(Glyph {
        text,
        x0,
        y0,
        x1,
        y1: y0 + size,
        size,
    });
}

fn decode_operand(
    obj: &Object,
    doc: &Document,
    fonts: &BTreeMap<Vec<u8>, &Dictionary>,
    current_font: &str,
) -> Option<String> {
    if let Object::String(bytes, _) = obj {
        if let Some(font_dict) = fonts.get(current_font.as_bytes()) {
            if let Ok(encoding) = font_dict.get_font_encoding(doc) {
                if let Ok(text) = Document::decode_text(&encoding, bytes) {
                    return Some(text);
                }
            }
        }
        Some(primitive::decode_bytes(bytes))
    } else {
        None
    }
}
