use arcstr::ArcStr;

/// Concatenation of every stylesheet in the snapshot, in snapshot iteration
/// order. No cascade guarantees beyond that order; collection never fails.
#[derive(Debug, Default)]
pub struct StyleBundle {
  sheets: Vec<ArcStr>,
}

impl StyleBundle {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, content: ArcStr) {
    if !content.trim().is_empty() {
      self.sheets.push(content);
    }
  }

  pub fn is_empty(&self) -> bool {
    self.sheets.is_empty()
  }

  pub fn text(&self) -> String {
    self.sheets.iter().map(ArcStr::as_str).collect::<Vec<_>>().join("\n")
  }
}

#[test]
fn concatenates_in_order_and_skips_blank() {
  let mut bundle = StyleBundle::new();
  bundle.push(arcstr::literal!(".a { color: red; }"));
  bundle.push(arcstr::literal!("   "));
  bundle.push(arcstr::literal!(".b { color: blue; }"));
  assert_eq!(bundle.text(), ".a { color: red; }\n.b { color: blue; }");
}
