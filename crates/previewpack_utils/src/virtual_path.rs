//! Helpers for the '/'-rooted virtual paths used by project snapshots.
//!
//! Snapshot paths never touch the OS filesystem, so they must not go through
//! `std::path` (separator and prefix handling differ per platform).

/// Returns the directory portion of `path`, always '/'-terminated-free.
/// The parent of a root-level file is `"/"`.
pub fn parent_dir(path: &str) -> &str {
  match path.rfind('/') {
    Some(0) | None => "/",
    Some(idx) => &path[..idx],
  }
}

/// Joins `segment` onto `base` (a directory) and normalizes the result.
pub fn join(base: &str, segment: &str) -> String {
  if segment.starts_with('/') {
    return normalize(segment);
  }
  let mut joined = String::with_capacity(base.len() + segment.len() + 1);
  joined.push_str(base);
  if !joined.ends_with('/') {
    joined.push('/');
  }
  joined.push_str(segment);
  normalize(&joined)
}

/// Collapses `.` and `..` segments. `..` above the root clamps to the root.
pub fn normalize(path: &str) -> String {
  let mut stack: Vec<&str> = Vec::new();
  for segment in path.split('/') {
    match segment {
      "" | "." => {}
      ".." => {
        stack.pop();
      }
      other => stack.push(other),
    }
  }
  let mut out = String::with_capacity(path.len());
  for segment in &stack {
    out.push('/');
    out.push_str(segment);
  }
  if out.is_empty() {
    out.push('/');
  }
  out
}

#[test]
fn test_parent_dir() {
  assert_eq!(parent_dir("/App.jsx"), "/");
  assert_eq!(parent_dir("/components/Card.jsx"), "/components");
  assert_eq!(parent_dir("Card.jsx"), "/");
}

#[test]
fn test_join() {
  assert_eq!(join("/components", "./Card"), "/components/Card");
  assert_eq!(join("/components", "../lib/utils"), "/lib/utils");
  assert_eq!(join("/", "./App"), "/App");
  assert_eq!(join("/a/b", "/absolute"), "/absolute");
}

#[test]
fn test_normalize_clamps_to_root() {
  assert_eq!(normalize("/../../x"), "/x");
  assert_eq!(normalize("/a/./b/../c"), "/a/c");
  assert_eq!(normalize("/"), "/");
}
