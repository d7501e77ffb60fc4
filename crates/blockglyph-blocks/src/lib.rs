//! Block types, the text display alphabet, and the static registry.
#![forbid(unsafe_code)]

pub mod registry;
pub mod types;

pub use registry::{BLOCK_TABLE, BlockTypeRegistry, UnknownDisplayCharacter};
pub use types::{BlockProps, BlockType, Rgb, UnknownBlockName};
