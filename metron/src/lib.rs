//! Metron - named-unit conversion
//!
//! Converts a value between two named units of the same physical quantity:
//!
//! ```
//! let registry = metron::ConverterRegistry::standard();
//! assert_eq!(registry.convert("temperature", 25.0, "ºC", "°F").unwrap(), 77.0);
//! ```
//!
//! Every quantity is served by its own [`Converter`]; nothing here converts
//! across quantities. Extra tables can be loaded from JSON through [`Config`].

mod config;
mod error;
mod registry;

use std::sync::LazyLock;

pub use config::{Config, SKIP_STANDARD_VAR, TABLES_PATH_VAR};
pub use error::MetronError;
pub use registry::ConverterRegistry;

pub use metron_core::{
    ConversionError, Converter, TableBuilder, TableError, UnitCoefficient, UnitTable, UnknownSide,
};
pub use metron_tables::{Quantity, UnknownQuantity};

/// Process-wide registry of the built-in quantities, built on first use
static STANDARD: LazyLock<ConverterRegistry> = LazyLock::new(ConverterRegistry::standard);

pub fn standard() -> &'static ConverterRegistry {
    &STANDARD
}

/// Convert using the built-in tables
pub fn convert(quantity: Quantity, value: f64, from: &str, to: &str) -> Result<f64, MetronError> {
    standard().convert(quantity.name(), value, from, to)
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Config, ConverterRegistry, MetronError, Quantity};
    pub use metron_core::prelude::*;
}
