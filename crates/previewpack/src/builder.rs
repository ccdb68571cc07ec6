use arcstr::ArcStr;
use previewpack_common::{ImportMap, PreviewOptions, SharedOptions, Snapshot};
use previewpack_error::TransformError;
use previewpack_store::{MemoryStore, ModuleStore};

use crate::{
  entry::discover_entry,
  locations::LocationRegistry,
  stages::{
    generate::{document, GenerateStage},
    scan::ScanStage,
  },
  types::{BuildStatus, PreviewOutput},
};

/// Turns snapshots into preview documents.
///
/// One builder serializes its own builds: each call to [`build`] consumes
/// the snapshot synchronously under a fresh generation token. Load
/// locations of an earlier generation stay live until the caller confirms a
/// newer document was delivered to the host, so the displayed document
/// never references a revoked location. A stale build is "cancelled" by
/// simply never delivering it; its locations are swept at the next
/// confirmation.
///
/// [`build`]: PreviewBuilder::build
pub struct PreviewBuilder<S: ModuleStore = MemoryStore> {
  options: SharedOptions,
  registry: LocationRegistry<S>,
  generation: u64,
  entry_path: Option<ArcStr>,
}

impl PreviewBuilder<MemoryStore> {
  pub fn new(options: PreviewOptions) -> Self {
    Self::with_store(options, MemoryStore::new())
  }
}

impl<S: ModuleStore> PreviewBuilder<S> {
  pub fn with_store(options: PreviewOptions, store: S) -> Self {
    Self {
      options: SharedOptions::new(options),
      registry: LocationRegistry::new(store),
      generation: 0,
      entry_path: None,
    }
  }

  /// Runs one full build against `snapshot`. Always returns a document;
  /// every failure mode is a typed diagnostic, never a hard fault.
  pub fn build(&mut self, snapshot: &Snapshot) -> PreviewOutput {
    self.generation += 1;
    let generation = self.generation;

    if snapshot.is_empty() {
      self.entry_path = None;
      return PreviewOutput {
        document: document::empty_project_document(),
        status: BuildStatus::EmptyProject,
        entry_path: None,
        import_map: ImportMap::new(),
        styles: String::new(),
        modules: Vec::new(),
        errors: vec![TransformError::empty_project()],
        generation,
      };
    }

    let entry_path = discover_entry(snapshot, self.entry_path.as_deref());
    self.entry_path = entry_path.clone();

    let Some(entry_path) = entry_path else {
      return PreviewOutput {
        document: document::entry_missing_document(),
        status: BuildStatus::EntryMissing,
        entry_path: None,
        import_map: ImportMap::new(),
        styles: String::new(),
        modules: Vec::new(),
        errors: vec![TransformError::entry_missing()],
        generation,
      };
    };

    let scan = ScanStage::new(snapshot, &self.options).scan();
    let mut errors = scan.errors;
    let styles = scan.styles.text();

    let generated =
      GenerateStage::new(&mut self.registry, generation).generate(scan.modules, scan.externals);

    // The entry existed in the snapshot but produced no module (its
    // transform failed). Nothing meaningful can mount.
    if !generated.import_map.contains(&entry_path) {
      errors.push(TransformError::entry_missing());
      return PreviewOutput {
        document: document::entry_missing_document(),
        status: BuildStatus::EntryMissing,
        entry_path: Some(entry_path),
        import_map: generated.import_map,
        styles,
        modules: generated.modules,
        errors,
        generation,
      };
    }

    let document = document::preview_document(
      &entry_path,
      &generated.import_map,
      &styles,
      &errors,
      &self.options,
    );
    let status = if errors.is_empty() { BuildStatus::Clean } else { BuildStatus::WithErrors };

    PreviewOutput {
      document,
      status,
      entry_path: Some(entry_path),
      import_map: generated.import_map,
      styles,
      modules: generated.modules,
      errors,
      generation,
    }
  }

  /// Tells the builder that the document of `generation` reached the host.
  /// Load locations of every earlier generation are released.
  pub fn confirm_delivered(&mut self, generation: u64) {
    self.registry.confirm_delivered(generation);
  }

  pub fn generation(&self) -> u64 {
    self.generation
  }

  pub fn store(&self) -> &S {
    self.registry.store()
  }
}

#[cfg(test)]
mod tests {
  use previewpack_common::VirtualFile;
  use previewpack_error::ErrorStage;

  use super::*;

  fn snapshot(files: &[(&str, &str)]) -> Snapshot {
    files.iter().map(|(path, content)| VirtualFile::new(*path, *content)).collect()
  }

  fn builder() -> PreviewBuilder {
    PreviewBuilder::new(PreviewOptions::default())
  }

  fn local_keys(map: &ImportMap) -> Vec<String> {
    map.keys().filter(|k| k.starts_with('/')).map(ToString::to_string).collect()
  }

  #[test]
  fn single_valid_entry_builds_clean() {
    let snap =
      snapshot(&[("/App.jsx", "export default function App(){ return <div>Hi</div> }")]);
    let output = builder().build(&snap);

    assert_eq!(output.status, BuildStatus::Clean);
    assert!(output.errors.is_empty(), "{:?}", output.errors);
    assert_eq!(local_keys(&output.import_map), vec!["/App.jsx".to_string()]);
    assert_eq!(output.entry_path.as_deref(), Some("/App.jsx"));
    // The bootstrap imports exactly that entry.
    assert!(output.document.markup.contains("import App from \"/App.jsx\";"));
  }

  #[test]
  fn dangling_alias_import_reports_and_still_assembles() {
    let snap = snapshot(&[("/App.jsx", "import X from '@/x'; export default ()=> <X/>")]);
    let output = builder().build(&snap);

    assert_eq!(output.status, BuildStatus::WithErrors);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].stage, ErrorStage::Resolve);
    assert_eq!(output.errors[0].path.as_deref(), Some("/App.jsx"));
    assert!(output.errors[0].message.contains("@/x"));
    assert!(output.document.markup.contains("<div id=\"preview-error-overlay\">"));
    assert!(output.import_map.contains("/App.jsx"));
  }

  #[test]
  fn unregistered_external_gets_no_import_map_entry() {
    let snap =
      snapshot(&[("/App.jsx", "import pad from 'left-pad';\nexport default () => null;")]);
    let output = builder().build(&snap);

    let resolve_errors: Vec<_> =
      output.errors.iter().filter(|e| e.stage == ErrorStage::Resolve).collect();
    assert_eq!(resolve_errors.len(), 1);
    assert!(!output.import_map.contains("left-pad"));
  }

  #[test]
  fn empty_snapshot_is_an_empty_project() {
    let output = builder().build(&Snapshot::new());
    assert_eq!(output.status, BuildStatus::EmptyProject);
    assert!(output.import_map.is_empty());
    assert!(!output.status.is_mounted());
  }

  #[test]
  fn files_without_any_entry_candidate_are_entry_missing() {
    let snap = snapshot(&[("/notes.txt", "hello"), ("/lib/helpers.js", "export const x = 1;")]);
    let output = builder().build(&snap);
    assert_eq!(output.status, BuildStatus::EntryMissing);
    assert!(output.document.markup.contains("No entry point found"));
  }

  #[test]
  fn entry_that_fails_to_parse_is_entry_missing_with_the_parse_error() {
    let snap = snapshot(&[("/App.jsx", "export default <div")]);
    let output = builder().build(&snap);
    assert_eq!(output.status, BuildStatus::EntryMissing);
    assert!(output.errors.iter().any(|e| e.stage == ErrorStage::Parse));
  }

  #[test]
  fn alias_and_relative_imports_share_one_import_map_entry() {
    let snap = snapshot(&[
      ("/App.jsx", "import Foo from '@/components/Foo';\nexport default () => <Foo/>;"),
      (
        "/components/index.jsx",
        "import Foo from './Foo';\nexport default () => <Foo/>;",
      ),
      ("/components/Foo.jsx", "export default function Foo() { return <b/>; }"),
    ]);
    let output = builder().build(&snap);

    assert!(output.errors.is_empty(), "{:?}", output.errors);
    let foo_entries =
      output.import_map.keys().filter(|k| k.contains("Foo")).count();
    assert_eq!(foo_entries, 1);
  }

  #[test]
  fn rebuild_from_identical_snapshot_is_idempotent_modulo_locations() {
    let snap = snapshot(&[
      ("/App.jsx", "import './app.css';\nexport default () => <div>Hi</div>;"),
      ("/app.css", ".x { color: red; }"),
    ]);
    let mut builder = builder();
    let first = builder.build(&snap);
    let second = builder.build(&snap);

    let first_keys: Vec<_> = first.import_map.keys().cloned().collect();
    let second_keys: Vec<_> = second.import_map.keys().cloned().collect();
    assert_eq!(first_keys, second_keys);
    assert_eq!(first.styles, second.styles);
  }

  #[test]
  fn generations_get_distinct_locations_and_old_ones_are_revoked_after_delivery() {
    let snap = snapshot(&[("/App.jsx", "export default () => <div/>;")]);
    let mut builder = builder();

    let first = builder.build(&snap);
    let first_location = first.import_map.get("/App.jsx").cloned().unwrap();

    let second = builder.build(&snap);
    let second_location = second.import_map.get("/App.jsx").cloned().unwrap();
    assert_ne!(first_location, second_location);

    // Until delivery is confirmed, the displayed (first) document's
    // locations must remain valid.
    assert!(builder.store().is_live(&first_location));
    assert!(builder.store().is_live(&second_location));

    builder.confirm_delivered(second.generation);
    assert!(!builder.store().is_live(&first_location));
    assert!(builder.store().is_live(&second_location));

    // The newest document references only live locations.
    for (_, location) in second.import_map.iter() {
      if location.starts_with("blob:") {
        assert!(builder.store().is_live(location));
      }
    }
  }

  #[test]
  fn previous_entry_survives_edits_to_other_files() {
    let mut builder = builder();
    let snap = snapshot(&[
      ("/Widget.jsx", "export default () => <div/>;"),
    ]);
    let output = builder.build(&snap);
    assert_eq!(output.entry_path.as_deref(), Some("/Widget.jsx"));

    // A canonical candidate appears later; the established entry wins.
    let snap = snapshot(&[
      ("/Widget.jsx", "export default () => <div/>;"),
      ("/App.jsx", "export default () => <span/>;"),
    ]);
    let output = builder.build(&snap);
    assert_eq!(output.entry_path.as_deref(), Some("/Widget.jsx"));
  }
}
