mod registry;
mod resolver;

pub use crate::{
  registry::{resolve_external, EXTERNAL_PACKAGES},
  resolver::SpecifierResolver,
};
