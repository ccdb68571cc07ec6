use arcstr::ArcStr;
use previewpack_utils::indexmap::FxIndexMap;

use crate::VirtualFile;

/// A point-in-time view of the whole virtual project, keyed by path.
///
/// Iteration follows insertion order, so determinism is inherited from the
/// snapshot provider. The core never mutates a snapshot during a build.
#[derive(Debug, Default, Clone)]
pub struct Snapshot {
  files: FxIndexMap<ArcStr, VirtualFile>,
}

impl Snapshot {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, file: VirtualFile) {
    self.files.insert(file.path.clone(), file);
  }

  pub fn get(&self, path: &str) -> Option<&VirtualFile> {
    self.files.get(path)
  }

  pub fn contains(&self, path: &str) -> bool {
    self.files.contains_key(path)
  }

  pub fn iter(&self) -> impl Iterator<Item = &VirtualFile> {
    self.files.values()
  }

  pub fn paths(&self) -> impl Iterator<Item = &ArcStr> {
    self.files.keys()
  }

  pub fn len(&self) -> usize {
    self.files.len()
  }

  pub fn is_empty(&self) -> bool {
    self.files.is_empty()
  }
}

impl<'a> IntoIterator for &'a Snapshot {
  type Item = &'a VirtualFile;
  type IntoIter = indexmap::map::Values<'a, ArcStr, VirtualFile>;

  fn into_iter(self) -> Self::IntoIter {
    self.files.values()
  }
}

impl FromIterator<VirtualFile> for Snapshot {
  fn from_iter<T: IntoIterator<Item = VirtualFile>>(iter: T) -> Self {
    let mut snapshot = Self::new();
    for file in iter {
      snapshot.insert(file);
    }
    snapshot
  }
}

#[test]
fn insert_replaces_by_path() {
  let mut snapshot = Snapshot::new();
  snapshot.insert(VirtualFile::new("/App.jsx", "old"));
  snapshot.insert(VirtualFile::new("/App.jsx", "new"));
  assert_eq!(snapshot.len(), 1);
  assert_eq!(snapshot.get("/App.jsx").map(|f| f.content.as_str()), Some("new"));
}
