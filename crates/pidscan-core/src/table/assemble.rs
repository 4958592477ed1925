use crate::classify::{Category, ClassifiedRegistry, ABSENT};
use serde::{Deserialize, Serialize};

/// The primary output: one rectangular row-oriented table keyed by the
/// fixed 21-column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Pivot the per-category sequences into rows.
///
/// Row count is the longest sequence's length, minimum 1, so an empty
/// document still yields one all-absent row. The drawing name is a
/// document-level fact: it fills the Drawing_Name cell on row 0 only,
/// later rows get an empty string. Categories missing from the registry
/// are synthesized entirely from the absence marker, so every row always
/// has every column.
pub fn assemble(registry: &ClassifiedRegistry, drawing_name: &str) -> ComponentTable {
    let row_count = registry
        .values()
        .map(|seq| seq.len())
        .max()
        .unwrap_or(0)
        .max(1);

    let columns: Vec<String> = Category::ALL.iter().map(|c| c.label().to_string()).collect();
    let mut rows = Vec::with_capacity(row_count);

    for i in 0..row_count {
        let mut row = Vec::with_capacity(columns.len());
        for category in Category::ALL {
            if category == Category::DrawingName {
                row.push(if i == 0 {
                    drawing_name.to_string()
                } else {
                    String::new()
                });
            } else {
                let cell = registry
                    .get(&category)
                    .and_then(|seq| seq.get(i))
                    .cloned()
                    .unwrap_or_else(|| ABSENT.to_string());
                row.push(cell);
            }
        }
        rows.push(row);
    }

    ComponentTable { columns, rows }
}
