use crate::model::Glyph;

/// Horizontal gap (as a multiple of font size) that separates two glyph
/// runs into different table cells.
const CELL_GAP_FACTOR: f64 = 1.5;

/// Vertical distance beyond which two multi-cell rows belong to
/// different tables.
const ROW_BREAK_GAP: f64 = 20.0;

/// Reconstruct grid tables from a page's positioned glyphs.
///
/// Glyphs are grouped into rows by rounded y-coordinate; a row whose
/// runs are separated by cell-sized gaps contributes a multi-cell row,
/// and vertically adjacent multi-cell rows form one table. Pages without
/// aligned columns simply produce no tables.
pub fn reconstruct_tables(glyphs: &[Glyph]) -> Vec<Vec<Vec<Option<String>>>> {
    use std::collections::BTreeMap;

    let mut buckets: BTreeMap<i64, Vec<&Glyph>> = BTreeMap::new();
    for glyph in glyphs {
        buckets.entry(glyph.y0.round() as i64).or_default().push(glyph);
    }

    // Rows top-first (descending y in PDF coordinate space).
    let mut rows: Vec<(i64, Vec<Option<String>>)> = Vec::new();
    for (y, mut row_glyphs) in buckets.into_iter().rev() {
        row_glyphs.sort_by(|a, b| {
            a.x0.partial_cmp(&b.x0).unwrap_or(std::cmp::Ordering::Equal)
        });
        let cells = split_cells(&row_glyphs);
        if cells.len() >= 2 {
            rows.push((y, cells));
        }
    }

    // Group vertically adjacent rows into tables.
    let mut out: Vec<Vec<Vec<Option<String>>>> = Vec::new();
    let mut current: Vec<Vec<Option<String>>> = Vec::new();
    let mut last_y: Option<i64> = None;

    for (y, cells) in rows {
        if let Some(prev) = last_y {
            if (prev - y) as f64 > ROW_BREAK_GAP && !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
        }
        current.push(cells);
        last_y = Some(y);
    }
    if !current.is_empty() {
        out.push(current);
    }

    // A lone multi-cell row is a label pair, not a table.
    out.retain(|table| table.len() >= 2);
    out
}

fn split_cells(row: &[&Glyph]) -> Vec<Option<String>> {
    let mut cells = Vec::new();
    let mut text = String::new();
    let mut prev_end: Option<f64> = None;

    for glyph in row {
        if let Some(end) = prev_end {
            let gap = glyph.x0 - end;
            if gap > glyph.size.max(1.0) * CELL_GAP_FACTOR {
                push_cell(&mut cells, &mut text);
            }
        }
        text.push_str(&glyph.text);
        prev_end = Some(glyph.x1);
    }
    push_cell(&mut cells, &mut text);
    cells
}

fn push_cell(cells: &mut Vec<Option<String>>, text: &mut String) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        cells.push(Some(trimmed.to_string()));
    }
    text.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, x0: f64, y0: f64) -> Vec<Glyph> {
        text.chars()
            .enumerate()
            .map(|(i, c)| Glyph {
                text: c.to_string(),
                x0: x0 + i as f64 * 6.0,
                y0,
                x1: x0 + (i + 1) as f64 * 6.0,
                y1: y0 + 10.0,
                size: 10.0,
            })
            .collect()
    }

    #[test]
    fn test_two_column_grid() {
        let mut glyphs = Vec::new();
        glyphs.extend(run("TAG", 50.0, 700.0));
        glyphs.extend(run("SERVICE", 200.0, 700.0));
        glyphs.extend(run("P-10226", 50.0, 688.0));
        glyphs.extend(run("CHARGE", 200.0, 688.0));

        let tables = reconstruct_tables(&glyphs);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].len(), 2);
        assert_eq!(tables[0][0], vec![Some("TAG".into()), Some("SERVICE".into())]);
        assert_eq!(
            tables[0][1],
            vec![Some("P-10226".into()), Some("CHARGE".into())]
        );
    }

    #[test]
    fn test_plain_text_produces_no_table() {
        let glyphs = run("GENERAL NOTES", 50.0, 700.0);
        assert!(reconstruct_tables(&glyphs).is_empty());
    }

    #[test]
    fn test_distant_rows_split_into_tables() {
        let mut glyphs = Vec::new();
        glyphs.extend(run("A", 50.0, 700.0));
        glyphs.extend(run("B", 200.0, 700.0));
        glyphs.extend(run("C", 50.0, 690.0));
        glyphs.extend(run("D", 200.0, 690.0));
        // Far below: a second grid.
        glyphs.extend(run("E", 50.0, 400.0));
        glyphs.extend(run("F", 200.0, 400.0));
        glyphs.extend(run("G", 50.0, 390.0));
        glyphs.extend(run("H", 200.0, 390.0));

        let tables = reconstruct_tables(&glyphs);
        assert_eq!(tables.len(), 2);
    }
}
