//! Deferred import-specifier substitution.
//!
//! The transformer enumerates specifiers; the builder resolves them; this
//! pass substitutes the resolved forms back into the generated module body
//! before it is registered under a load location. Only static import and
//! re-export statements are rewritten; the codegen prints each of them on
//! its own line.

use rustc_hash::FxHashMap;

/// Replaces each import/export-from specifier found in `mapping` with its
/// resolved form. Specifiers absent from the mapping (externals, and locals
/// that failed to resolve) are left verbatim.
pub fn rewrite_import_specifiers(code: &str, mapping: &FxHashMap<String, String>) -> String {
  if mapping.is_empty() {
    return code.to_string();
  }

  let mut result = String::with_capacity(code.len());
  for line in code.lines() {
    match extract_specifier(line) {
      Some((before, specifier, after)) => match mapping.get(specifier) {
        Some(resolved) => {
          result.push_str(before);
          result.push_str(resolved);
          result.push_str(after);
        }
        None => result.push_str(line),
      },
      None => result.push_str(line),
    }
    result.push('\n');
  }

  if !code.ends_with('\n') && result.ends_with('\n') {
    result.pop();
  }
  result
}

/// Splits an import/export line around its quoted specifier, returning
/// (prefix including the opening quote, specifier, suffix starting at the
/// closing quote). Lines that are not module statements return `None`.
fn extract_specifier(line: &str) -> Option<(&str, &str, &str)> {
  let trimmed = line.trim_start();
  let is_import = trimmed.starts_with("import ") || trimmed.starts_with("import\"");
  let is_reexport = trimmed.starts_with("export ") && trimmed.contains(" from ");
  if !is_import && !is_reexport {
    return None;
  }

  let start = line.find(['"', '\''])?;
  let quote = line.as_bytes()[start] as char;
  let rest = &line[start + 1..];
  let len = rest.find(quote)?;
  Some((&line[..=start], &rest[..len], &rest[len..]))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn mapping(pairs: &[(&str, &str)]) -> FxHashMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
  }

  #[test]
  fn rewrites_from_specifier() {
    let code = "import Card from \"./Card\";\nconsole.log(Card);";
    let out = rewrite_import_specifiers(code, &mapping(&[("./Card", "/components/Card.jsx")]));
    assert_eq!(out, "import Card from \"/components/Card.jsx\";\nconsole.log(Card);");
  }

  #[test]
  fn rewrites_single_quoted_and_side_effect_imports() {
    let code = "import './setup';";
    let out = rewrite_import_specifiers(code, &mapping(&[("./setup", "/setup.js")]));
    assert_eq!(out, "import '/setup.js';");
  }

  #[test]
  fn rewrites_reexports() {
    let code = "export { Card } from \"./Card\";\nexport * from \"./helpers\";";
    let out = rewrite_import_specifiers(
      code,
      &mapping(&[("./Card", "/Card.jsx"), ("./helpers", "/helpers.js")]),
    );
    assert_eq!(out, "export { Card } from \"/Card.jsx\";\nexport * from \"/helpers.js\";");
  }

  #[test]
  fn leaves_unmapped_and_non_import_lines_alone() {
    let code = "import React from \"react\";\nconst s = \"./Card\";\nexport const x = 1;";
    let out = rewrite_import_specifiers(code, &mapping(&[("./Card", "/Card.jsx")]));
    assert_eq!(out, code);
  }

  #[test]
  fn preserves_missing_trailing_newline() {
    let code = "import a from \"./a\";";
    let out = rewrite_import_specifiers(code, &mapping(&[("./a", "/a.js")]));
    assert!(!out.ends_with('\n'));
  }
}
