//! Assembly of the self-contained preview document.
//!
//! One HTML payload embeds the import map (consumed verbatim by the host's
//! native module loader), the aggregated stylesheet, a non-blocking error
//! overlay, and a bootstrap that imports the entry module and mounts its
//! default export. Runtime errors after mount are surfaced through a crash
//! panel and a postMessage channel to the parent window.

use itertools::Itertools;
use previewpack_common::{
  ImportMap, PreviewDocument, PreviewOptions, SandboxCapabilities,
};
use previewpack_error::TransformError;
use previewpack_utils::html::escape_text;

const BASE_STYLES: &str = "\
#preview-error-overlay { position: fixed; top: 0; left: 0; right: 0; z-index: 9999; \
background: #fef2f2; border-bottom: 1px solid #fecaca; color: #991b1b; \
font: 12px/1.5 ui-monospace, monospace; padding: 8px 12px; max-height: 40vh; overflow: auto; }\n\
#preview-error-overlay .heading { font-weight: 600; margin-bottom: 4px; }\n\
#preview-error-overlay pre { margin: 2px 0; white-space: pre-wrap; }\n\
#preview-crash-panel { display: none; position: fixed; bottom: 0; left: 0; right: 0; z-index: 9999; \
background: #1f2937; color: #fca5a5; font: 12px/1.5 ui-monospace, monospace; \
padding: 8px 12px; white-space: pre-wrap; }\n\
.preview-diagnostic { display: flex; height: 100vh; align-items: center; justify-content: center; \
color: #6b7280; font: 14px system-ui, sans-serif; text-align: center; padding: 0 24px; }";

/// Assembles the mountable document. The preview still mounts with a
/// non-empty error list; the overlay sits above the mount point so the user
/// sees both the diagnostics and whatever did compile.
pub fn preview_document(
  entry_path: &str,
  import_map: &ImportMap,
  styles: &str,
  errors: &[TransformError],
  options: &PreviewOptions,
) -> PreviewDocument {
  let entry_literal = js_string(entry_path);
  let mount_literal = js_string(&options.mount_element_id);
  let overlay = error_overlay(errors);
  let mount_id = escape_text(&options.mount_element_id);
  let import_map_json = import_map.to_json();
  let user_styles = styles;

  let markup = format!(
    r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<script type="importmap">
{import_map_json}
</script>
<style>
{BASE_STYLES}
</style>
<style>
{user_styles}
</style>
</head>
<body>
{overlay}<div id="{mount_id}"></div>
<div id="preview-crash-panel"></div>
<script>
window.__reportPreviewError = function (message) {{
  var panel = document.getElementById("preview-crash-panel");
  if (panel) {{
    panel.style.display = "block";
    panel.textContent = String(message);
  }}
  if (window.parent !== window) {{
    window.parent.postMessage({{ type: "preview-runtime-error", message: String(message) }}, "*");
  }}
}};
window.addEventListener("error", function (event) {{
  window.__reportPreviewError(event.message || event.error || "Unknown error");
}});
window.addEventListener("unhandledrejection", function (event) {{
  window.__reportPreviewError(event.reason || "Unhandled rejection");
}});
</script>
<script type="module">
import React from "react";
import {{ createRoot }} from "react-dom/client";
import App from {entry_literal};

try {{
  const root = createRoot(document.getElementById({mount_literal}));
  root.render(React.createElement(App));
}} catch (error) {{
  window.__reportPreviewError(error);
}}
</script>
</body>
</html>"#
  );

  PreviewDocument { markup, sandbox_policy: SandboxCapabilities::preview_default() }
}

/// Terminal document: files exist, but nothing is usable as an entry.
pub fn entry_missing_document() -> PreviewDocument {
  diagnostic_document(
    "No entry point found. Create an App.jsx or index.jsx file to get started.",
  )
}

/// Terminal document: the snapshot has no files at all.
pub fn empty_project_document() -> PreviewDocument {
  diagnostic_document("No files to preview yet.")
}

fn diagnostic_document(message: &str) -> PreviewDocument {
  let message = escape_text(message);
  let markup = format!(
    r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
{BASE_STYLES}
</style>
</head>
<body>
<div class="preview-diagnostic">{message}</div>
</body>
</html>"#
  );

  // A diagnostic page runs nothing, so the host need not grant anything.
  PreviewDocument { markup, sandbox_policy: SandboxCapabilities::empty() }
}

fn error_overlay(errors: &[TransformError]) -> String {
  if errors.is_empty() {
    return String::new();
  }
  let items = errors
    .iter()
    .map(|error| format!("<pre>{}</pre>", escape_text(&error.to_string())))
    .join("\n");
  format!(
    "<div id=\"preview-error-overlay\">\n<div class=\"heading\">Build problems</div>\n{items}\n</div>\n"
  )
}

/// Escapes a value into a JS string literal for the bootstrap script.
fn js_string(value: &str) -> String {
  serde_json::to_string(value).expect("string serialization cannot fail")
}

#[cfg(test)]
mod tests {
  use super::*;

  fn map_with_entry() -> ImportMap {
    let mut map = ImportMap::new();
    map.insert("/App.jsx", "blob:preview/1-x");
    map
  }

  #[test]
  fn embeds_import_map_styles_and_bootstrap() {
    let doc = preview_document(
      "/App.jsx",
      &map_with_entry(),
      ".card { color: red; }",
      &[],
      &PreviewOptions::default(),
    );
    assert!(doc.markup.contains("<script type=\"importmap\">"));
    assert!(doc.markup.contains("blob:preview/1-x"));
    assert!(doc.markup.contains(".card { color: red; }"));
    assert!(doc.markup.contains("import App from \"/App.jsx\";"));
    assert!(doc.markup.contains("id=\"root\""));
    assert!(!doc.markup.contains("preview-error-overlay\">"));
    assert_eq!(doc.sandbox_policy, SandboxCapabilities::preview_default());
  }

  #[test]
  fn overlay_rendered_above_mount_point_when_errors_exist() {
    let errors = vec![TransformError::parse("/Broken.jsx", "unexpected token `<`")];
    let doc = preview_document(
      "/App.jsx",
      &map_with_entry(),
      "",
      &errors,
      &PreviewOptions::default(),
    );
    let overlay_at = doc.markup.find("preview-error-overlay").unwrap();
    let mount_at = doc.markup.find("id=\"root\"").unwrap();
    assert!(overlay_at < mount_at);
    assert!(doc.markup.contains("unexpected token `&lt;`"));
  }

  #[test]
  fn diagnostic_documents_grant_no_capabilities() {
    let doc = entry_missing_document();
    assert!(doc.markup.contains("No entry point found"));
    assert_eq!(doc.sandbox_policy, SandboxCapabilities::empty());

    let doc = empty_project_document();
    assert!(doc.markup.contains("No files to preview"));
  }
}
