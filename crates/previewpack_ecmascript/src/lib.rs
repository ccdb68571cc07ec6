mod compiler;
mod rewrite;

pub use crate::{
  compiler::{transform, TransformReturn},
  rewrite::rewrite_import_specifiers,
};
