use pidscan_core::error::PidscanError;
use std::path::PathBuf;

use crate::output;

pub fn run(artifact_dir: PathBuf, output_format: &str) -> Result<(), PidscanError> {
    // A missing analysis artifact is fatal here; extract must run first.
    let analysis = pidscan_core::artifacts::load_analysis(&artifact_dir)?;
    let harvest = pidscan_core::artifacts::load_harvest(&artifact_dir)?;

    let result = pidscan_core::scan_from_artifacts(harvest, analysis);

    match output_format {
        "json" => output::json::print(&result.sheets())?,
        _ => output::table::print_scan(&result),
    }

    Ok(())
}
