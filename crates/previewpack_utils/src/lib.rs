pub mod html;
pub mod indexmap;
pub mod virtual_path;
pub mod xxhash;
