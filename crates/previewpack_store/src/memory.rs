use arcstr::ArcStr;
use previewpack_utils::{indexmap::FxIndexSet, xxhash::xxhash_token};

use crate::ModuleStore;

/// In-process store minting opaque `blob:`-style handles and tracking which
/// are still live. Two registrations of identical code get distinct handles,
/// matching the single-load semantics of real object URLs.
#[derive(Debug, Default)]
pub struct MemoryStore {
  counter: u64,
  live: FxIndexSet<ArcStr>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_live(&self, location: &str) -> bool {
    self.live.contains(location)
  }

  pub fn live_count(&self) -> usize {
    self.live.len()
  }
}

impl ModuleStore for MemoryStore {
  fn create(&mut self, code: &str) -> ArcStr {
    self.counter += 1;
    let location =
      ArcStr::from(format!("blob:preview/{}-{}", self.counter, xxhash_token(code.as_bytes())));
    self.live.insert(location.clone());
    location
  }

  fn revoke(&mut self, location: &str) {
    self.live.shift_remove(location);
  }
}
