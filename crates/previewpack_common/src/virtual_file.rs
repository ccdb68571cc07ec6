use arcstr::ArcStr;

/// Extensions that mark a file as a transformable module source, in the
/// order extension completion tries them.
pub const SOURCE_EXTENSIONS: [&str; 4] = ["jsx", "tsx", "js", "ts"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
  /// JSX/TSX/JS/TS source that goes through the transformer.
  ComponentSource,
  /// Stylesheet content aggregated into the preview's style bundle.
  Stylesheet,
  /// Anything else. Passed through verbatim when imported.
  Other,
}

impl FileKind {
  pub fn from_path(path: &str) -> Self {
    match path.rsplit('.').next() {
      Some(ext) if SOURCE_EXTENSIONS.contains(&ext) => Self::ComponentSource,
      Some("css") => Self::Stylesheet,
      _ => Self::Other,
    }
  }
}

/// One file of the virtual project. Identity is `path`. Owned by the
/// external virtual file system; the core only ever reads these.
#[derive(Debug, Clone)]
pub struct VirtualFile {
  pub path: ArcStr,
  pub kind: FileKind,
  pub content: ArcStr,
}

impl VirtualFile {
  /// Creates a file, deriving `kind` from the path's extension.
  pub fn new(path: impl Into<ArcStr>, content: impl Into<ArcStr>) -> Self {
    let path = path.into();
    let kind = FileKind::from_path(&path);
    Self { path, kind, content: content.into() }
  }

  pub fn with_kind(path: impl Into<ArcStr>, kind: FileKind, content: impl Into<ArcStr>) -> Self {
    Self { path: path.into(), kind, content: content.into() }
  }

  pub fn is_typescript(&self) -> bool {
    self.path.ends_with(".tsx") || self.path.ends_with(".ts")
  }
}

#[test]
fn kind_from_path() {
  assert_eq!(FileKind::from_path("/App.jsx"), FileKind::ComponentSource);
  assert_eq!(FileKind::from_path("/src/util.ts"), FileKind::ComponentSource);
  assert_eq!(FileKind::from_path("/styles.css"), FileKind::Stylesheet);
  assert_eq!(FileKind::from_path("/data.json"), FileKind::Other);
  assert_eq!(FileKind::from_path("/README"), FileKind::Other);
}
