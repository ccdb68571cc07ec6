use arcstr::ArcStr;
use previewpack_utils::indexmap::FxIndexMap;
use serde::Serialize;

/// The specifier → load location table consumed verbatim by the preview
/// host's native module loader.
///
/// Keys are either resolved local paths (so alias and relative spellings of
/// the same file share one entry) or external package specifiers.
#[derive(Debug, Default, Serialize)]
pub struct ImportMap {
  imports: FxIndexMap<ArcStr, ArcStr>,
}

impl ImportMap {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, specifier: impl Into<ArcStr>, location: impl Into<ArcStr>) {
    self.imports.insert(specifier.into(), location.into());
  }

  pub fn get(&self, specifier: &str) -> Option<&ArcStr> {
    self.imports.get(specifier)
  }

  pub fn contains(&self, specifier: &str) -> bool {
    self.imports.contains_key(specifier)
  }

  pub fn len(&self) -> usize {
    self.imports.len()
  }

  pub fn is_empty(&self) -> bool {
    self.imports.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&ArcStr, &ArcStr)> {
    self.imports.iter()
  }

  pub fn keys(&self) -> impl Iterator<Item = &ArcStr> {
    self.imports.keys()
  }

  /// Renders the `{"imports": {...}}` JSON embedded into the document.
  pub fn to_json(&self) -> String {
    serde_json::to_string_pretty(self).unwrap_or_else(|_| String::from("{\"imports\":{}}"))
  }
}

impl<'a> IntoIterator for &'a ImportMap {
  type Item = (&'a ArcStr, &'a ArcStr);
  type IntoIter = indexmap::map::Iter<'a, ArcStr, ArcStr>;

  fn into_iter(self) -> Self::IntoIter {
    self.imports.iter()
  }
}

#[test]
fn serializes_under_imports_key() {
  let mut map = ImportMap::new();
  map.insert("/App.jsx", "blob:preview/1-abc");
  let json = map.to_json();
  assert!(json.contains("\"imports\""));
  assert!(json.contains("\"/App.jsx\""));
  assert!(json.contains("blob:preview/1-abc"));
}
