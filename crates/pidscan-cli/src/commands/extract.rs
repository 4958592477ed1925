use pidscan_core::error::PidscanError;
use pidscan_core::extraction::lopdf_backend::LopdfHarvester;
use pidscan_core::extraction::DocumentHarvester;
use std::path::PathBuf;

use crate::output;

pub fn run(pdf_file: PathBuf, out_dir: PathBuf, output_format: &str) -> Result<(), PidscanError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let harvester = LopdfHarvester::new();
    let harvest = harvester.harvest(&pdf_bytes)?;
    let analysis = pidscan_core::analyze::analyze_piping(&harvest);

    pidscan_core::artifacts::save_artifacts(&out_dir, &harvest, &analysis)?;
    eprintln!(
        "Extracted {} page(s), {} annotation(s); artifacts written to {}",
        harvest.metadata.total_pages,
        harvest.annotations.len(),
        out_dir.display()
    );

    match output_format {
        "json" => output::json::print(&analysis)?,
        _ => output::table::print_extract_summary(&harvest, &analysis),
    }

    Ok(())
}
