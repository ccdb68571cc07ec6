mod builder;
mod entry;
mod locations;
mod stages;
mod types;

pub use crate::{
  builder::PreviewBuilder,
  entry::{discover_entry, ENTRY_CANDIDATES},
  locations::LocationRegistry,
  types::{BuildStatus, PreviewOutput},
};
pub use previewpack_common::*;
pub use previewpack_error::{ErrorStage, TransformError};
pub use previewpack_store::{DataUrlStore, MemoryStore, ModuleStore};
