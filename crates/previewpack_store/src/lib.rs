mod data_url;
mod memory;
mod module_store;

pub use crate::{data_url::DataUrlStore, memory::MemoryStore, module_store::ModuleStore};
