use arcstr::ArcStr;
use previewpack_common::{ImportMap, PreviewDocument, TransformedModule};
use previewpack_error::TransformError;

/// The terminal state of one build. All four variants are distinguishable
/// so the host UI can render the right message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
  /// Entry mounted, zero diagnostics.
  Clean,
  /// Entry mounted alongside a non-blocking error overlay.
  WithErrors,
  /// Files exist but none is usable as an entry point.
  EntryMissing,
  /// The snapshot has no files at all.
  EmptyProject,
}

impl BuildStatus {
  pub fn is_mounted(self) -> bool {
    matches!(self, Self::Clean | Self::WithErrors)
  }
}

/// Everything one build produces. The document is handed to the preview
/// host; the rest is for the caller's UI and for lifecycle bookkeeping.
#[derive(Debug)]
pub struct PreviewOutput {
  pub document: PreviewDocument,
  pub status: BuildStatus,
  pub entry_path: Option<ArcStr>,
  pub import_map: ImportMap,
  pub styles: String,
  pub modules: Vec<TransformedModule>,
  pub errors: Vec<TransformError>,
  /// Monotonic build token. Pass it back via
  /// [`crate::PreviewBuilder::confirm_delivered`] once the host has the
  /// document, so earlier generations' load locations can be released.
  pub generation: u64,
}
