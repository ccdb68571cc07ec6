pub mod document;

use arcstr::ArcStr;
use previewpack_common::{ImportMap, TransformedModule};
use previewpack_ecmascript::rewrite_import_specifiers;
use previewpack_resolver::resolve_external;
use previewpack_store::ModuleStore;
use previewpack_utils::indexmap::FxIndexMap;

use crate::{locations::LocationRegistry, stages::scan::ScannedModule};

/// Specifiers the bootstrap script itself imports. They must be mapped even
/// when no project module mentions them.
const BOOTSTRAP_EXTERNALS: [&str; 2] = ["react", "react-dom/client"];

#[derive(Debug)]
pub struct GenerateStageOutput {
  pub import_map: ImportMap,
  pub modules: Vec<TransformedModule>,
}

/// Applies the deferred specifier rewrites, registers every module body
/// under a load location owned by this build's generation, and produces the
/// complete specifier table.
pub struct GenerateStage<'a, S: ModuleStore> {
  registry: &'a mut LocationRegistry<S>,
  generation: u64,
}

impl<'a, S: ModuleStore> GenerateStage<'a, S> {
  pub fn new(registry: &'a mut LocationRegistry<S>, generation: u64) -> Self {
    Self { registry, generation }
  }

  pub fn generate(
    self,
    scanned: FxIndexMap<ArcStr, ScannedModule>,
    mut externals: FxIndexMap<ArcStr, ArcStr>,
  ) -> GenerateStageOutput {
    let mut import_map = ImportMap::new();
    let mut modules = Vec::with_capacity(scanned.len());

    for (path, module) in scanned {
      let code = rewrite_import_specifiers(&module.code, &module.rewrites);
      let location = self.registry.create(self.generation, &code);
      import_map.insert(path.clone(), location.clone());
      modules.push(TransformedModule {
        source_path: path,
        executable_code: code,
        load_location: location,
        local_dependencies: module.local_dependencies,
      });
    }

    for specifier in BOOTSTRAP_EXTERNALS {
      if !externals.contains_key(specifier) {
        if let Some(address) = resolve_external(specifier) {
          externals.insert(ArcStr::from(specifier), ArcStr::from(address));
        }
      }
    }
    for (specifier, address) in externals {
      import_map.insert(specifier, address);
    }

    GenerateStageOutput { import_map, modules }
  }
}

#[cfg(test)]
mod tests {
  use previewpack_store::MemoryStore;
  use previewpack_utils::indexmap::FxIndexSet;
  use rustc_hash::FxHashMap;

  use super::*;

  #[test]
  fn registers_modules_and_bootstrap_externals() {
    let mut registry = LocationRegistry::new(MemoryStore::new());

    let mut scanned = FxIndexMap::default();
    let mut rewrites = FxHashMap::default();
    rewrites.insert("./Card".to_string(), "/Card.jsx".to_string());
    scanned.insert(
      ArcStr::from("/App.jsx"),
      ScannedModule {
        code: "import Card from \"./Card\";\nexport default Card;".to_string(),
        rewrites,
        local_dependencies: FxIndexSet::default(),
      },
    );

    let output =
      GenerateStage::new(&mut registry, 1).generate(scanned, FxIndexMap::default());

    assert!(output.import_map.contains("/App.jsx"));
    assert!(output.import_map.contains("react"));
    assert!(output.import_map.contains("react-dom/client"));

    let module = &output.modules[0];
    assert!(module.executable_code.contains("from \"/Card.jsx\""));
    assert!(registry.store().is_live(&module.load_location));
  }
}
