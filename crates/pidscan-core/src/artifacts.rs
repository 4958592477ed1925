use crate::error::PidscanError;
use crate::model::{HarvestResult, PipingAnalysis};
use std::path::Path;

/// File name of the raw-extraction artifact.
pub const RAW_EXTRACTION_FILE: &str = "pdf_extraction_results.json";
/// File name of the derived piping-analysis artifact.
pub const PIPING_ANALYSIS_FILE: &str = "piping_analysis.json";

/// Persist both intermediate artifacts to `dir`, overwriting existing
/// files.
pub fn save_artifacts(
    dir: &Path,
    harvest: &HarvestResult,
    analysis: &PipingAnalysis,
) -> Result<(), PidscanError> {
    std::fs::create_dir_all(dir)?;
    std::fs::write(
        dir.join(RAW_EXTRACTION_FILE),
        serde_json::to_string_pretty(harvest)?,
    )?;
    std::fs::write(
        dir.join(PIPING_ANALYSIS_FILE),
        serde_json::to_string_pretty(analysis)?,
    )?;
    Ok(())
}

/// Load the raw-extraction artifact written by a previous run.
pub fn load_harvest(dir: &Path) -> Result<HarvestResult, PidscanError> {
    load_json(&dir.join(RAW_EXTRACTION_FILE))
}

/// Load the piping-analysis artifact written by a previous run.
///
/// A missing file is fatal for the stages that depend on it.
pub fn load_analysis(dir: &Path) -> Result<PipingAnalysis, PidscanError> {
    load_json(&dir.join(PIPING_ANALYSIS_FILE))
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, PidscanError> {
    if !path.exists() {
        return Err(PidscanError::MissingArtifact {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| PidscanError::ArtifactLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageText;

    #[test]
    fn test_round_trip() {
        let dir = std::env::temp_dir().join("pidscan-artifacts-test");
        let harvest = HarvestResult {
            text_content: vec![PageText {
                page: 1,
                text: "102-DA-111-001".into(),
            }],
            ..Default::default()
        };
        let analysis = PipingAnalysis {
            annotations_text: vec!["FT-101".into()],
            ..Default::default()
        };

        save_artifacts(&dir, &harvest, &analysis).unwrap();
        let loaded_harvest = load_harvest(&dir).unwrap();
        let loaded_analysis = load_analysis(&dir).unwrap();

        assert_eq!(loaded_harvest.text_content, harvest.text_content);
        assert_eq!(loaded_analysis.annotations_text, analysis.annotations_text);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_analysis_is_fatal() {
        let dir = std::env::temp_dir().join("pidscan-artifacts-missing");
        std::fs::remove_dir_all(&dir).ok();
        match load_analysis(&dir) {
            Err(PidscanError::MissingArtifact { .. }) => {}
            other => panic!("expected MissingArtifact, got {other:?}"),
        }
    }
}
