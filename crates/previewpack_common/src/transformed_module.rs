use arcstr::ArcStr;
use previewpack_utils::indexmap::FxIndexSet;

/// One source file after transformation and specifier rewriting, registered
/// under an addressable load location. Owned by the build that produced it;
/// its location is revoked once a newer build's document has been delivered.
#[derive(Debug)]
pub struct TransformedModule {
  pub source_path: ArcStr,
  pub executable_code: String,
  pub load_location: ArcStr,
  pub local_dependencies: FxIndexSet<ArcStr>,
}
