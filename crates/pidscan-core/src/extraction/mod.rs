pub mod lopdf_backend;
pub mod primitive;
pub mod tables;

use crate::error::PidscanError;
use crate::model::HarvestResult;

/// Trait for document harvesting backends.
///
/// A harvester turns raw PDF bytes into the page-indexed bag of text,
/// tables, glyphs, vector primitives, annotations, and metadata that the
/// rest of the pipeline consumes. Single-page failures are handled inside
/// the backend (skip and continue); only a whole-document open failure is
/// an error.
pub trait DocumentHarvester: Send + Sync {
    fn harvest(&self, pdf_bytes: &[u8]) -> Result<HarvestResult, PidscanError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
