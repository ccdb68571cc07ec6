use arcstr::ArcStr;

use crate::ModuleStore;

/// Embeds module code directly into `data:` URLs, producing documents that
/// are self-contained on disk. There is nothing to release, so revocation
/// is a no-op. Used by the CLI.
#[derive(Debug, Default)]
pub struct DataUrlStore;

impl DataUrlStore {
  pub fn new() -> Self {
    Self
  }
}

impl ModuleStore for DataUrlStore {
  fn create(&mut self, code: &str) -> ArcStr {
    let encoded = base64_simd::STANDARD.encode_to_string(code.as_bytes());
    ArcStr::from(format!("data:text/javascript;base64,{encoded}"))
  }

  fn revoke(&mut self, _location: &str) {}
}

#[test]
fn encodes_module_code() {
  let mut store = DataUrlStore::new();
  let location = store.create("export default 1;");
  assert!(location.starts_with("data:text/javascript;base64,"));
}
