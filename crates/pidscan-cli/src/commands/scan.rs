use pidscan_core::error::PidscanError;
use pidscan_core::extraction::lopdf_backend::LopdfHarvester;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    out_file: Option<PathBuf>,
) -> Result<(), PidscanError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let harvester = LopdfHarvester::new();
    let result = pidscan_core::scan_document(&pdf_bytes, &harvester)?;

    if let Some(path) = out_file {
        // Always write the sheet set as JSON when saving to file.
        let json = serde_json::to_string_pretty(&result.sheets())?;
        std::fs::write(&path, json)?;
        eprintln!(
            "{} component row(s), {} detail record(s), written to {}",
            result.components.rows.len(),
            result.details.len(),
            path.display()
        );
        return Ok(());
    }

    match output_format {
        "json" => output::json::print(&result.sheets())?,
        _ => output::table::print_scan(&result),
    }

    Ok(())
}
