//! Affine coefficient relating a unit to its quantity's base unit

use std::fmt;
use serde::{Deserialize, Serialize};

/// The `(scale, offset)` pair of one unit.
///
/// Encodes the affine map from the canonical base unit to this unit:
/// `value_in_unit = value_in_base * scale + offset`.
///
/// Serialized as a two-element array `[scale, offset]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct UnitCoefficient {
    /// Units per base unit. May be negative for inverted scales (Delisle).
    pub scale: f64,
    /// Value of this unit when the base value is zero.
    pub offset: f64,
}

impl UnitCoefficient {
    /// The coefficient of a base unit
    pub const IDENTITY: UnitCoefficient = UnitCoefficient { scale: 1.0, offset: 0.0 };

    pub const fn new(scale: f64, offset: f64) -> Self {
        UnitCoefficient { scale, offset }
    }

    /// Create a proportional coefficient (no offset)
    pub const fn linear(scale: f64) -> Self {
        UnitCoefficient { scale, offset: 0.0 }
    }

    /// Check if this is exactly the base unit coefficient
    pub fn is_base(&self) -> bool {
        self.scale == 1.0 && self.offset == 0.0
    }

    /// Check if this unit has an offset (non-proportional conversion)
    pub fn has_offset(&self) -> bool {
        self.offset != 0.0
    }

    /// Convert a value in this unit to the base unit
    pub fn to_base(&self, value: f64) -> f64 {
        // base = (value - offset) / scale
        (value - self.offset) / self.scale
    }

    /// Convert a base unit value to this unit
    pub fn from_base(&self, base: f64) -> f64 {
        // value = base * scale + offset
        base * self.scale + self.offset
    }
}

impl Default for UnitCoefficient {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<(f64, f64)> for UnitCoefficient {
    fn from((scale, offset): (f64, f64)) -> Self {
        UnitCoefficient { scale, offset }
    }
}

impl From<UnitCoefficient> for (f64, f64) {
    fn from(c: UnitCoefficient) -> Self {
        (c.scale, c.offset)
    }
}

impl fmt::Display for UnitCoefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_offset() {
            write!(f, "x * {} + {}", self.scale, self.offset)
        } else {
            write!(f, "x * {}", self.scale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fahrenheit() -> UnitCoefficient {
        UnitCoefficient::new(1.8, 32.0)
    }

    #[test]
    fn test_identity_is_base() {
        assert!(UnitCoefficient::IDENTITY.is_base());
        assert!(UnitCoefficient::default().is_base());
        assert!(!fahrenheit().is_base());
        assert!(!UnitCoefficient::linear(1000.0).is_base());
    }

    #[test]
    fn test_has_offset() {
        assert!(fahrenheit().has_offset());
        assert!(!UnitCoefficient::linear(0.001).has_offset());
    }

    #[test]
    fn test_from_base() {
        assert_eq!(fahrenheit().from_base(100.0), 212.0);
        assert_eq!(fahrenheit().from_base(-40.0), -40.0);
    }

    #[test]
    fn test_to_base() {
        assert_relative_eq!(fahrenheit().to_base(212.0), 100.0, max_relative = 1e-12);
        // Inverted scale
        let delisle = UnitCoefficient::new(-1.5, 150.0);
        assert_eq!(delisle.to_base(0.0), 100.0);
        assert_eq!(delisle.to_base(150.0), 0.0);
    }

    #[test]
    fn test_zero_scale_is_not_an_error() {
        let broken = UnitCoefficient::linear(0.0);
        assert!(broken.to_base(1.0).is_infinite());
        assert!(broken.to_base(0.0).is_nan());
    }

    #[test]
    fn test_serde_as_pair() {
        let json = serde_json::to_string(&fahrenheit()).unwrap();
        assert_eq!(json, "[1.8,32.0]");

        let back: UnitCoefficient = serde_json::from_str("[-1.5, 150]").unwrap();
        assert_eq!(back, UnitCoefficient::new(-1.5, 150.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(fahrenheit().to_string(), "x * 1.8 + 32");
        assert_eq!(UnitCoefficient::linear(0.001).to_string(), "x * 0.001");
    }
}
