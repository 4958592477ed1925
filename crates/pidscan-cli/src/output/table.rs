use pidscan_core::classify::ABSENT;
use pidscan_core::model::{HarvestResult, PipingAnalysis};
use pidscan_core::ScanResult;

/// Human-readable rendering of a full scan: the component registry by
/// column, then the detail records.
pub fn print_scan(result: &ScanResult) {
    println!("=== {} ===\n", result.drawing_name);

    for (col, label) in result.components.columns.iter().enumerate() {
        if label == "Drawing_Name" {
            continue;
        }
        let values: Vec<&str> = result
            .components
            .rows
            .iter()
            .map(|row| row[col].as_str())
            .filter(|cell| !cell.is_empty() && *cell != ABSENT)
            .collect();
        if values.is_empty() {
            continue;
        }
        println!("  {label}");
        for value in values {
            println!("    {value}");
        }
    }

    if !result.details.is_empty() {
        println!("\n  Details:");
        for record in &result.details {
            let mut parts = Vec::new();
            if let Some(ref flow) = record.flow {
                parts.push(format!("Flow {flow}"));
            }
            if let Some(ref pressure) = record.pressure {
                parts.push(format!("Pressure {pressure}"));
            }
            if let Some(ref temperature) = record.temperature {
                parts.push(format!("Temp {temperature}"));
            }
            if let Some(ref rpm) = record.rpm {
                parts.push(format!("{rpm}"));
            }
            if let Some(ref description) = record.description {
                parts.push(description.clone());
            }
            println!(
                "    {:<16} {:<10} {}",
                record.component_id,
                record.category.to_string(),
                parts.join(", ")
            );
        }
    }

    println!(
        "\n  {} component row(s), {} annotation(s)",
        result.components.rows.len(),
        result.annotations.len()
    );
}

/// Summary printed after the extract stage.
pub fn print_extract_summary(harvest: &HarvestResult, analysis: &PipingAnalysis) {
    println!("Pages:              {}", harvest.metadata.total_pages);
    println!("Pages with text:    {}", harvest.text_content.len());
    println!("Tables:             {}", harvest.tables.len());
    println!("Annotations:        {}", harvest.annotations.len());
    println!("Candidate tags:     {}", analysis.annotations_text.len());
    println!("Dimension matches:  {}", analysis.dimensions.len());
    println!(
        "Reconstructed runs: {}",
        analysis.coordinate_patterns.len()
    );

    if !analysis.annotations_text.is_empty() {
        println!("\nCandidate tags:");
        for tag in &analysis.annotations_text {
            println!("  {tag}");
        }
    }
}
