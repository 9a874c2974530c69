//! Metron Core - Fundamental types
//!
//! This crate provides the core types used throughout Metron:
//! - `UnitCoefficient`: affine `(scale, offset)` map from a base unit
//! - `UnitTable`: immutable unit-name → coefficient mapping
//! - `Converter`: the conversion engine bound to one table
//! - `ConversionError`, `TableError`: structured errors

mod coefficient;
mod table;
mod engine;
mod error;

pub use coefficient::UnitCoefficient;
pub use table::{UnitTable, TableBuilder};
pub use engine::Converter;
pub use error::{ConversionError, TableError, UnknownSide};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Converter, ConversionError, UnitCoefficient, UnitTable};
}
