//! Metron Tables - Per-quantity unit tables
//!
//! Static configuration data for the conversion engine, one table per
//! physical quantity:
//! - Temperature (ºC, °F, K, Rankine, Delisle, ...)
//! - Length (m, km, in, ft, au, pc, historical regional units, ...)
//! - Weight (kg, g, lb, oz, troy, apothecary, ...)
//! - Volume (L, m³, gal, cup, barrels, ...)
//! - Area (m², ha, acre, tsubo, ...)
//! - Speed (m/s, km/h, mph, knots, c, ...)
//!
//! Each table keeps every historical synonym as its own entry.

pub mod temperature;
pub mod length;
pub mod weight;
pub mod volume;
pub mod area;
pub mod speed;

use std::fmt;
use std::str::FromStr;

use metron_core::{Converter, UnitTable};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A physical quantity with a built-in unit table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Temperature,
    Length,
    Weight,
    Volume,
    Area,
    Speed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quantity: {0}")]
pub struct UnknownQuantity(pub String);

impl Quantity {
    pub const ALL: [Quantity; 6] = [
        Quantity::Temperature,
        Quantity::Length,
        Quantity::Weight,
        Quantity::Volume,
        Quantity::Area,
        Quantity::Speed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Quantity::Temperature => "temperature",
            Quantity::Length => "length",
            Quantity::Weight => "weight",
            Quantity::Volume => "volume",
            Quantity::Area => "area",
            Quantity::Speed => "speed",
        }
    }

    /// The canonical base unit: coefficient `(1, 0)`
    pub fn base_unit(&self) -> &'static str {
        match self {
            Quantity::Temperature => temperature::BASE_UNIT,
            Quantity::Length => length::BASE_UNIT,
            Quantity::Weight => weight::BASE_UNIT,
            Quantity::Volume => volume::BASE_UNIT,
            Quantity::Area => area::BASE_UNIT,
            Quantity::Speed => speed::BASE_UNIT,
        }
    }

    /// Build a fresh copy of this quantity's table
    pub fn table(&self) -> UnitTable {
        match self {
            Quantity::Temperature => temperature::table(),
            Quantity::Length => length::table(),
            Quantity::Weight => weight::table(),
            Quantity::Volume => volume::table(),
            Quantity::Area => area::table(),
            Quantity::Speed => speed::table(),
        }
    }

    /// Build an engine bound to this quantity's table
    pub fn converter(&self) -> Converter {
        Converter::new(self.table())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quantity {
    type Err = UnknownQuantity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "temperature" => Ok(Quantity::Temperature),
            "length" | "distance" => Ok(Quantity::Length),
            "weight" | "mass" => Ok(Quantity::Weight),
            "volume" => Ok(Quantity::Volume),
            "area" => Ok(Quantity::Area),
            "speed" | "velocity" => Ok(Quantity::Speed),
            _ => Err(UnknownQuantity(s.to_string())),
        }
    }
}
