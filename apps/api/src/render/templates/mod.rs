//! The five layout strategies. Each consumes the same `Resume` and returns the
//! children of the preview root.

pub mod classic;
pub mod creative;
pub mod executive;
pub mod minimal;
pub mod modern;
