mod import_map;
mod preview_document;
mod preview_options;
mod resolved_specifier;
mod snapshot;
mod style_bundle;
mod transformed_module;
mod virtual_file;

pub use crate::{
  import_map::ImportMap,
  preview_document::{PreviewDocument, SandboxCapabilities},
  preview_options::{PreviewOptions, SharedOptions},
  resolved_specifier::ResolvedSpecifier,
  snapshot::Snapshot,
  style_bundle::StyleBundle,
  transformed_module::TransformedModule,
  virtual_file::{FileKind, VirtualFile, SOURCE_EXTENSIONS},
};
