pub mod analyze;
pub mod artifacts;
pub mod classify;
pub mod error;
pub mod extraction;
pub mod model;
pub mod table;

use classify::drawing;
use classify::{ClassifiedRegistry, PatternTable};
use error::PidscanError;
use extraction::DocumentHarvester;
use model::{DetailRecord, HarvestResult, PipingAnalysis};
use serde::{Deserialize, Serialize};
use table::{ComponentTable, SheetData};

/// Full result of one document scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Document label resolved from page text, or "Unknown Drawing".
    pub drawing_name: String,
    /// The rectangular component table (primary output).
    pub components: ComponentTable,
    /// Secondary specification/connectivity records.
    pub details: Vec<DetailRecord>,
    /// The deduplicated candidate tag list (reference output).
    pub annotations: Vec<String>,
    /// Raw harvest, kept for artifact persistence and diagnostics.
    pub harvest: HarvestResult,
    /// Derived piping analysis.
    pub analysis: PipingAnalysis,
}

impl ScanResult {
    /// The three named sheets handed to the external spreadsheet writer.
    pub fn sheets(&self) -> Vec<SheetData> {
        table::build_sheets(&self.components, &self.details, &self.annotations)
    }
}

/// Main API entry point: run the whole pipeline on one document.
///
/// Harvest -> analyze -> classify -> assemble, plus the independent
/// detail pass. Pages are processed in order (the identity resolver and
/// the dedup stages are order-sensitive) and page-level extraction
/// failures have already been skipped inside the harvester, so a partly
/// unreadable document still produces output.
pub fn scan_document(
    pdf_bytes: &[u8],
    harvester: &dyn DocumentHarvester,
) -> Result<ScanResult, PidscanError> {
    let harvest = harvester.harvest(pdf_bytes)?;
    let analysis = analyze::analyze_piping(&harvest);
    Ok(build_result(harvest, analysis))
}

/// Rebuild the classification outputs from previously persisted
/// artifacts, without touching the source document.
pub fn scan_from_artifacts(
    harvest: HarvestResult,
    analysis: PipingAnalysis,
) -> ScanResult {
    build_result(harvest, analysis)
}

fn build_result(harvest: HarvestResult, analysis: PipingAnalysis) -> ScanResult {
    let registry: ClassifiedRegistry =
        classify::classify(&analysis.annotations_text, PatternTable::builtin());
    let drawing_name = drawing::resolve_drawing_name(&harvest.text_content);
    let components = table::assemble(&registry, &drawing_name);
    let details = table::extract_details(&harvest);
    let annotations = analysis.annotations_text.clone();

    ScanResult {
        drawing_name,
        components,
        details,
        annotations,
        harvest,
        analysis,
    }
}
