/// Escapes text for interpolation into HTML element content or a
/// double-quoted attribute value.
pub fn escape_text(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(c),
    }
  }
  out
}

#[test]
fn test_escape_text() {
  assert_eq!(escape_text("<div class=\"a\">&'"), "&lt;div class=&quot;a&quot;&gt;&amp;&#39;");
  assert_eq!(escape_text("plain"), "plain");
}
