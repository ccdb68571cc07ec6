use arcstr::ArcStr;
use previewpack_common::{
  FileKind, ResolvedSpecifier, Snapshot, StyleBundle, PreviewOptions,
};
use previewpack_error::{ErrorSink, TransformError};
use previewpack_resolver::{resolve_external, SpecifierResolver};
use previewpack_utils::indexmap::{FxIndexMap, FxIndexSet};
use rustc_hash::{FxHashMap, FxHashSet};

/// One transformed file, pre-rewrite: the generated module body, the
/// substitutions the generate stage must apply, and the local files it
/// depends on.
#[derive(Debug)]
pub struct ScannedModule {
  pub code: String,
  pub rewrites: FxHashMap<String, String>,
  pub local_dependencies: FxIndexSet<ArcStr>,
}

#[derive(Debug)]
pub struct ScanStageOutput {
  pub modules: FxIndexMap<ArcStr, ScannedModule>,
  /// Distinct external specifiers mapped to their hosted addresses.
  pub externals: FxIndexMap<ArcStr, ArcStr>,
  pub styles: StyleBundle,
  pub errors: Vec<TransformError>,
}

/// Walks the snapshot as a dependency graph rooted at every file.
///
/// Each file is transformed at most once per build (memoized by path), and
/// cycles are tolerated by marking a path in progress instead of
/// re-entering it. Errors from any file are collected and never stop the
/// resolution of the remaining files.
pub struct ScanStage<'a> {
  snapshot: &'a Snapshot,
  options: &'a PreviewOptions,
  modules: FxIndexMap<ArcStr, ScannedModule>,
  /// Files whose transform already failed. Kept so a file imported from
  /// several places reports exactly once per build.
  failed: FxHashSet<ArcStr>,
  visiting: FxHashSet<ArcStr>,
  externals: FxIndexMap<ArcStr, ArcStr>,
  styles: StyleBundle,
  errors: ErrorSink,
}

impl<'a> ScanStage<'a> {
  pub fn new(snapshot: &'a Snapshot, options: &'a PreviewOptions) -> Self {
    Self {
      snapshot,
      options,
      modules: FxIndexMap::default(),
      failed: FxHashSet::default(),
      visiting: FxHashSet::default(),
      externals: FxIndexMap::default(),
      styles: StyleBundle::new(),
      errors: ErrorSink::default(),
    }
  }

  pub fn scan(mut self) -> ScanStageOutput {
    for file in self.snapshot.iter() {
      match file.kind {
        FileKind::ComponentSource => self.ensure_module(&file.path.clone()),
        FileKind::Stylesheet => self.styles.push(file.content.clone()),
        // Materialized only if some module imports it.
        FileKind::Other => {}
      }
    }

    ScanStageOutput {
      modules: self.modules,
      externals: self.externals,
      styles: self.styles,
      errors: self.errors.into_inner(),
    }
  }

  /// Transforms `path` and, transitively, every local file it imports.
  fn ensure_module(&mut self, path: &ArcStr) {
    if self.modules.contains_key(path) || self.failed.contains(path) || self.visiting.contains(path)
    {
      return;
    }
    let Some(file) = self.snapshot.get(path) else {
      return;
    };
    self.visiting.insert(path.clone());

    match previewpack_ecmascript::transform(file) {
      Ok(transformed) => {
        let mut rewrites = FxHashMap::default();
        let mut local_dependencies = FxIndexSet::default();

        // Dedupe so one dangling specifier reports once per importing file.
        let specifiers: FxIndexSet<String> = transformed.imports.into_iter().collect();
        for specifier in &specifiers {
          let resolved =
            SpecifierResolver::new(self.snapshot, &self.options.alias_prefix)
              .resolve(specifier, path);
          match resolved {
            ResolvedSpecifier::Local(target) => {
              if self.snapshot.contains(&target) {
                rewrites.insert(specifier.clone(), target.to_string());
                local_dependencies.insert(target.clone());
                self.ensure_module(&target);
              } else {
                self.errors.push(TransformError::resolve(
                  path.clone(),
                  format!("Cannot resolve '{specifier}': no file at {target}"),
                ));
              }
            }
            ResolvedSpecifier::External(external) => match resolve_external(&external) {
              Some(address) => {
                self.externals.entry(external).or_insert_with(|| ArcStr::from(address));
              }
              None => self.errors.push(TransformError::resolve(
                path.clone(),
                format!("Unknown external package '{external}'"),
              )),
            },
          }
        }

        self.modules.insert(
          path.clone(),
          ScannedModule { code: transformed.code, rewrites, local_dependencies },
        );
      }
      Err(error) => {
        self.failed.insert(path.clone());
        self.errors.push(error);
      }
    }

    self.visiting.remove(path);
  }
}
