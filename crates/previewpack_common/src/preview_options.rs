use std::sync::Arc;

use arcstr::ArcStr;

pub type SharedOptions = Arc<PreviewOptions>;

/// Build-wide configuration. Read-only once the builder is constructed.
#[derive(Debug, Clone)]
pub struct PreviewOptions {
  /// Prefix that maps a specifier onto the project root, e.g. `@/lib/x`
  /// resolves to `/lib/x`.
  pub alias_prefix: ArcStr,
  /// Id of the element the entry component is mounted into.
  pub mount_element_id: ArcStr,
}

impl Default for PreviewOptions {
  fn default() -> Self {
    Self { alias_prefix: arcstr::literal!("@/"), mount_element_id: arcstr::literal!("root") }
  }
}
