use crate::model::{CoordinateLine, PageGlyphs};
use std::collections::BTreeMap;

/// A y-bucket must hold more than this many glyphs to count as a text
/// run. Smaller groups are dimension ticks and isolated symbols, not
/// component labels.
const MIN_RUN_GLYPHS: usize = 5;

/// Reconstruct horizontal text runs from independently positioned glyphs.
///
/// Glyphs are bucketed by rounded y-coordinate; each bucket over the
/// noise threshold is concatenated in ascending x order into one line.
/// Output is ordered by page, then ascending y within the page, so the
/// result is stable for identical input.
pub fn reconstruct_lines(pages: &[PageGlyphs]) -> Vec<CoordinateLine> {
    let mut out = Vec::new();

    for page in pages {
        let mut buckets: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
        for (i, glyph) in page.characters.iter().enumerate() {
            buckets.entry(glyph.y0.round() as i64).or_default().push(i);
        }

        for (y, indices) in buckets {
            if indices.len() <= MIN_RUN_GLYPHS {
                continue;
            }

            let mut ordered = indices;
            ordered.sort_by(|&a, &b| {
                page.characters[a]
                    .x0
                    .partial_cmp(&page.characters[b].x0)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            let text: String = ordered
                .iter()
                .map(|&i| page.characters[i].text.as_str())
                .collect();
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }

            out.push(CoordinateLine {
                y_coordinate: y,
                text: trimmed.to_string(),
                page: page.page,
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Glyph;

    fn glyph(text: &str, x0: f64, y0: f64) -> Glyph {
        Glyph {
            text: text.into(),
            x0,
            y0,
            x1: x0 + 5.0,
            y1: y0 + 8.0,
            size: 8.0,
        }
    }

    #[test]
    fn test_reconstructs_run_in_x_order() {
        // Glyphs arrive out of x order and with sub-unit y jitter.
        let page = PageGlyphs {
            page: 1,
            characters: vec![
                glyph("0", 120.0, 500.2),
                glyph("P", 100.0, 500.0),
                glyph("1", 125.0, 499.8),
                glyph("T", 105.0, 500.1),
                glyph("-", 110.0, 500.0),
                glyph("1", 115.0, 499.9),
            ],
        };
        let lines = reconstruct_lines(&[page]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "PT-101");
        assert_eq!(lines[0].y_coordinate, 500);
        assert_eq!(lines[0].page, 1);
    }

    #[test]
    fn test_small_buckets_discarded() {
        // Exactly 5 glyphs is at the threshold and still noise.
        let page = PageGlyphs {
            page: 1,
            characters: (0..5).map(|i| glyph("x", i as f64 * 5.0, 200.0)).collect(),
        };
        assert!(reconstruct_lines(&[page]).is_empty());
    }

    #[test]
    fn test_separate_rows_stay_separate() {
        let mut characters = Vec::new();
        for (i, c) in "FT-1234".chars().enumerate() {
            characters.push(glyph(&c.to_string(), i as f64 * 5.0, 300.0));
        }
        for (i, c) in "PT-5678".chars().enumerate() {
            characters.push(glyph(&c.to_string(), i as f64 * 5.0, 340.0));
        }
        let lines = reconstruct_lines(&[PageGlyphs { page: 2, characters }]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "FT-1234");
        assert_eq!(lines[1].text, "PT-5678");
    }
}
