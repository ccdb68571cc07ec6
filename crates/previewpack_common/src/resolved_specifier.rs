use arcstr::ArcStr;

/// Outcome of resolving one import specifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedSpecifier {
  /// A snapshot path, with alias and extension completion already applied.
  /// The path is not guaranteed to exist; absence is a resolution failure
  /// surfaced by the caller.
  Local(ArcStr),
  /// An external package name or subpath, left verbatim.
  External(ArcStr),
}

impl ResolvedSpecifier {
  pub fn as_str(&self) -> &str {
    match self {
      Self::Local(path) | Self::External(path) => path,
    }
  }

  pub fn is_external(&self) -> bool {
    matches!(self, Self::External(_))
  }
}
