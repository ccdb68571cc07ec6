use arcstr::ArcStr;
use previewpack_common::{ResolvedSpecifier, Snapshot, SOURCE_EXTENSIONS};
use previewpack_utils::virtual_path;

/// Resolves module specifiers written inside snapshot files.
///
/// Pure and total: a local specifier that matches nothing in the snapshot
/// still resolves, to a `Local` path absent from it. The caller surfaces
/// that absence as a resolution error; this resolver never fails.
pub struct SpecifierResolver<'a> {
  snapshot: &'a Snapshot,
  alias_prefix: &'a str,
}

impl<'a> SpecifierResolver<'a> {
  pub fn new(snapshot: &'a Snapshot, alias_prefix: &'a str) -> Self {
    Self { snapshot, alias_prefix }
  }

  pub fn resolve(&self, specifier: &str, from_path: &str) -> ResolvedSpecifier {
    if let Some(rest) = specifier.strip_prefix(self.alias_prefix) {
      // Alias-prefixed: absolute from the project root.
      let root_relative = virtual_path::normalize(&format!("/{rest}"));
      return ResolvedSpecifier::Local(self.complete_extension(&root_relative));
    }

    if specifier.starts_with("./") || specifier.starts_with("../") {
      let joined = virtual_path::join(virtual_path::parent_dir(from_path), specifier);
      return ResolvedSpecifier::Local(self.complete_extension(&joined));
    }

    // Anything else is an external package specifier, returned verbatim and
    // never checked against the snapshot.
    ResolvedSpecifier::External(ArcStr::from(specifier))
  }

  /// Tries the literal path, each source extension appended, then the path
  /// as a directory with an `index` file. First snapshot hit wins; with no
  /// hit, the normalized literal path is returned as-is.
  fn complete_extension(&self, path: &str) -> ArcStr {
    if self.snapshot.contains(path) {
      return ArcStr::from(path);
    }
    for ext in SOURCE_EXTENSIONS {
      let candidate = format!("{path}.{ext}");
      if self.snapshot.contains(&candidate) {
        return ArcStr::from(candidate);
      }
    }
    for ext in SOURCE_EXTENSIONS {
      let candidate = format!("{path}/index.{ext}");
      if self.snapshot.contains(&candidate) {
        return ArcStr::from(candidate);
      }
    }
    ArcStr::from(path)
  }
}
