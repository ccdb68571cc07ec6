use arcstr::ArcStr;
use previewpack_common::Snapshot;

/// Candidate entry paths, most canonical first.
pub const ENTRY_CANDIDATES: [&str; 6] =
  ["/App.jsx", "/App.tsx", "/index.jsx", "/index.tsx", "/src/App.jsx", "/src/App.tsx"];

/// Picks the entry module for a snapshot.
///
/// A previously used entry is preferred as long as it still exists, so the
/// preview does not jump between roots while the user edits. Otherwise the
/// fixed candidate list is scanned, then the first markup-bearing file in
/// snapshot order is used as a fallback.
pub fn discover_entry(snapshot: &Snapshot, previous: Option<&str>) -> Option<ArcStr> {
  if let Some(previous) = previous {
    if snapshot.contains(previous) {
      return Some(ArcStr::from(previous));
    }
  }

  for candidate in ENTRY_CANDIDATES {
    if snapshot.contains(candidate) {
      return Some(ArcStr::from(candidate));
    }
  }

  snapshot
    .paths()
    .find(|path| path.ends_with(".jsx") || path.ends_with(".tsx"))
    .cloned()
}

#[cfg(test)]
mod tests {
  use previewpack_common::VirtualFile;

  use super::*;

  fn snapshot(paths: &[&str]) -> Snapshot {
    paths.iter().map(|p| VirtualFile::new(*p, "")).collect()
  }

  #[test]
  fn candidates_scanned_in_order() {
    let snap = snapshot(&["/index.jsx", "/App.jsx"]);
    assert_eq!(discover_entry(&snap, None).as_deref(), Some("/App.jsx"));
  }

  #[test]
  fn previous_entry_preferred_over_rediscovery() {
    let snap = snapshot(&["/App.jsx", "/Widget.jsx"]);
    assert_eq!(discover_entry(&snap, Some("/Widget.jsx")).as_deref(), Some("/Widget.jsx"));
  }

  #[test]
  fn stale_previous_entry_falls_back_to_candidates() {
    let snap = snapshot(&["/App.jsx"]);
    assert_eq!(discover_entry(&snap, Some("/Gone.jsx")).as_deref(), Some("/App.jsx"));
  }

  #[test]
  fn falls_back_to_first_markup_file() {
    let snap = snapshot(&["/lib/helpers.js", "/components/Card.jsx"]);
    assert_eq!(discover_entry(&snap, None).as_deref(), Some("/components/Card.jsx"));
  }

  #[test]
  fn none_when_no_markup_file_exists() {
    let snap = snapshot(&["/lib/helpers.js", "/notes.txt"]);
    assert_eq!(discover_entry(&snap, None), None);
  }
}
