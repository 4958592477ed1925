use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PidscanError {
    #[error("failed to open PDF document: {0}")]
    DocumentOpen(String),

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("intermediate artifact not found: {}. Run 'extract' first.", path.display())]
    MissingArtifact { path: PathBuf },

    #[error("failed to load artifact from {path}: {reason}")]
    ArtifactLoad { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
