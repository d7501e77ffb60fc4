//! Layered character grids drawn with the block display alphabet.
#![forbid(unsafe_code)]

pub mod codec;
pub mod config;
pub mod grid;

pub use codec::GridError;
pub use config::{GridConfig, UnknownPolicy};
pub use grid::Grid;
