pub mod assemble;
pub mod details;

pub use assemble::{assemble, ComponentTable};
pub use details::extract_details;

use crate::model::DetailRecord;
use serde::{Deserialize, Serialize};

/// One named sheet handed to the external spreadsheet writer. The writer's
/// whole contract is "write these named tables to named sheets".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetData {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub const COMPONENTS_SHEET: &str = "PID_Components";
pub const DETAILS_SHEET: &str = "Component_Details";
pub const ANNOTATIONS_SHEET: &str = "All_Annotations";

/// Flatten the pipeline outputs into the three named sheets.
pub fn build_sheets(
    components: &ComponentTable,
    details: &[DetailRecord],
    annotations: &[String],
) -> Vec<SheetData> {
    let detail_rows: Vec<Vec<String>> = details
        .iter()
        .map(|r| {
            vec![
                r.component_id.clone(),
                r.category.to_string(),
                r.flow.clone().unwrap_or_default(),
                r.pressure.clone().unwrap_or_default(),
                r.temperature.clone().unwrap_or_default(),
                r.rpm.clone().unwrap_or_default(),
                r.description.clone().unwrap_or_default(),
            ]
        })
        .collect();

    vec![
        SheetData {
            name: COMPONENTS_SHEET.to_string(),
            columns: components.columns.clone(),
            rows: components.rows.clone(),
        },
        SheetData {
            name: DETAILS_SHEET.to_string(),
            columns: [
                "Component_ID",
                "Category",
                "Flow",
                "Pressure",
                "Temperature",
                "RPM",
                "Description",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            rows: detail_rows,
        },
        SheetData {
            name: ANNOTATIONS_SHEET.to_string(),
            columns: vec!["Annotation".to_string()],
            rows: annotations.iter().map(|a| vec![a.clone()]).collect(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ClassifiedRegistry;
    use crate::model::{DetailCategory, DetailRecord};

    #[test]
    fn test_three_named_sheets() {
        let components = assemble(&ClassifiedRegistry::new(), "Unknown Drawing");
        let mut detail = DetailRecord::new("P-10226", DetailCategory::Equipment);
        detail.flow = Some("1,481 GPM".into());
        let annotations = vec!["FT-101".to_string()];

        let sheets = build_sheets(&components, &[detail], &annotations);
        assert_eq!(sheets.len(), 3);
        assert_eq!(sheets[0].name, COMPONENTS_SHEET);
        assert_eq!(sheets[1].name, DETAILS_SHEET);
        assert_eq!(sheets[2].name, ANNOTATIONS_SHEET);

        assert_eq!(sheets[1].rows[0][0], "P-10226");
        assert_eq!(sheets[1].rows[0][2], "1,481 GPM");
        assert_eq!(sheets[2].rows, vec![vec!["FT-101".to_string()]]);
    }
}
