use arcstr::ArcStr;

/// The seam between the build pipeline and whatever surface actually makes
/// module code addressable to a native loader.
///
/// A load location is an opaque, origin-scoped, load-once handle. In a
/// browser host the implementation wraps object-URL creation/revocation;
/// tests and the CLI use the in-process implementations in this crate.
pub trait ModuleStore {
  /// Makes `code` addressable and returns its load location.
  fn create(&mut self, code: &str) -> ArcStr;

  /// Releases one load location. Unknown locations are ignored.
  fn revoke(&mut self, location: &str);
}
