use arcstr::ArcStr;
use previewpack_store::ModuleStore;

/// Generation-tagged ownership of load locations.
///
/// Every location minted during build *N* is tagged with *N*. Locations of
/// build *N-1* are released only after build *N*'s document has been
/// confirmed delivered, so the currently displayed document never references
/// a revoked handle. Generations that were built but never delivered are
/// swept by the same confirmation.
#[derive(Debug)]
pub struct LocationRegistry<S: ModuleStore> {
  store: S,
  live: Vec<(u64, Vec<ArcStr>)>,
}

impl<S: ModuleStore> LocationRegistry<S> {
  pub fn new(store: S) -> Self {
    Self { store, live: Vec::new() }
  }

  pub fn create(&mut self, generation: u64, code: &str) -> ArcStr {
    let location = self.store.create(code);
    match self.live.last_mut() {
      Some((gen, locations)) if *gen == generation => locations.push(location.clone()),
      _ => self.live.push((generation, vec![location.clone()])),
    }
    location
  }

  /// Revokes every location belonging to a generation older than
  /// `generation`.
  pub fn confirm_delivered(&mut self, generation: u64) {
    let mut retained = Vec::with_capacity(self.live.len());
    for (gen, locations) in self.live.drain(..) {
      if gen < generation {
        for location in &locations {
          self.store.revoke(location);
        }
      } else {
        retained.push((gen, locations));
      }
    }
    self.live = retained;
  }

  pub fn store(&self) -> &S {
    &self.store
  }
}

#[cfg(test)]
mod tests {
  use previewpack_store::MemoryStore;

  use super::*;

  #[test]
  fn delivery_confirmation_releases_older_generations_only() {
    let mut registry = LocationRegistry::new(MemoryStore::new());
    let first = registry.create(1, "a");
    let second = registry.create(2, "b");

    // Generation 2 built but not yet delivered: both must stay live.
    assert!(registry.store().is_live(&first));
    assert!(registry.store().is_live(&second));

    registry.confirm_delivered(2);
    assert!(!registry.store().is_live(&first));
    assert!(registry.store().is_live(&second));
  }

  #[test]
  fn undelivered_stale_generations_are_swept() {
    let mut registry = LocationRegistry::new(MemoryStore::new());
    let stale = registry.create(1, "a");
    let skipped = registry.create(2, "b");
    let newest = registry.create(3, "c");

    registry.confirm_delivered(3);
    assert!(!registry.store().is_live(&stale));
    assert!(!registry.store().is_live(&skipped));
    assert!(registry.store().is_live(&newest));
  }
}
