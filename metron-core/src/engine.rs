//! The conversion engine: one instance per quantity

use tracing::{debug, trace};

use crate::{ConversionError, UnitCoefficient, UnitTable};

/// Converts values between any two units of one table.
///
/// Coefficients are stored relative to a common base unit, so every
/// conversion goes through the base: `base = (value - offset_from) / scale_from`,
/// then `result = base * scale_to + offset_to`. The table is never mutated
/// after construction, which makes a `Converter` safe to share across threads
/// without locking.
#[derive(Debug, Clone)]
pub struct Converter {
    table: UnitTable,
}

impl Converter {
    /// Bind an engine to a table. Coefficients are not validated.
    pub fn new(table: UnitTable) -> Self {
        debug!(units = table.len(), "converter created");
        Converter { table }
    }

    /// Convert `value` from unit `from` to unit `to`.
    ///
    /// Self-conversions are computed like any other pair. NaN and infinities
    /// propagate; a zero scale yields a non-finite result rather than an error.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        let (source, target) = match (self.table.get(from), self.table.get(to)) {
            (Some(s), Some(t)) => (s, t),
            (s, t) => {
                debug!(from, to, "conversion with unknown unit");
                return Err(ConversionError::UnknownUnit {
                    from: s.is_none().then(|| from.to_string()),
                    to: t.is_none().then(|| to.to_string()),
                });
            }
        };

        let base = source.to_base(value);
        let result = target.from_base(base);
        trace!(value, from, to, base, result, "converted");
        Ok(result)
    }

    /// Check whether the table defines `name`
    pub fn has_unit(&self, name: &str) -> bool {
        self.table.contains(name)
    }

    /// All unit names, in table order
    pub fn list_units(&self) -> Vec<&str> {
        self.table.names().collect()
    }

    pub fn coefficient(&self, name: &str) -> Result<UnitCoefficient, ConversionError> {
        self.table
            .get(name)
            .copied()
            .ok_or_else(|| ConversionError::unknown(name))
    }

    /// Convert a value in `unit` to the canonical base unit
    pub fn to_base(&self, value: f64, unit: &str) -> Result<f64, ConversionError> {
        Ok(self.coefficient(unit)?.to_base(value))
    }

    /// Convert a canonical base value to `unit`
    pub fn from_base(&self, base: f64, unit: &str) -> Result<f64, ConversionError> {
        let target = self.table.get(unit).ok_or_else(|| ConversionError::UnknownUnit {
            from: None,
            to: Some(unit.to_string()),
        })?;
        Ok(target.from_base(base))
    }

    /// Names whose coefficient is exactly `(1, 0)`: the base unit and its synonyms
    pub fn base_units(&self) -> Vec<&str> {
        self.table
            .iter()
            .filter(|(_, c)| c.is_base())
            .map(|(name, _)| name)
            .collect()
    }

    /// Known unit names resembling `name`, best match first
    pub fn suggest(&self, name: &str) -> Vec<&str> {
        let mut matches: Vec<(&str, usize)> = self
            .table
            .names()
            .filter_map(|candidate| {
                let score = similarity_score(name, candidate);
                (score > 0).then_some((candidate, score))
            })
            .collect();

        // Stable sort keeps table order among equal scores
        matches.sort_by(|a, b| b.1.cmp(&a.1));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    pub fn table(&self) -> &UnitTable {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl From<UnitTable> for Converter {
    fn from(table: UnitTable) -> Self {
        Converter::new(table)
    }
}

/// Similarity between a query and a candidate unit name
fn similarity_score(query: &str, candidate: &str) -> usize {
    if query.is_empty() || query == candidate {
        return 0;
    }

    let query_lower = query.to_lowercase();
    let candidate_lower = candidate.to_lowercase();
    let mut score = 0;

    // Same name in another case is the likeliest typo
    if query_lower == candidate_lower {
        score += 200;
    } else if candidate_lower.starts_with(&query_lower) {
        score += 100;
    } else if candidate_lower.contains(&query_lower) {
        score += 50;
    } else if query_lower.starts_with(&candidate_lower) && candidate.chars().count() > 1 {
        // "meters" -> "meter"
        score += 30;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnknownSide;
    use approx::assert_relative_eq;

    fn temperature() -> Converter {
        Converter::new(
            UnitTable::builder()
                .unit("ºC", 1.0, 0.0)
                .unit("Celsius", 1.0, 0.0)
                .unit("°F", 1.8, 32.0)
                .unit("K", 1.0, 273.15)
                .unit("ºD", -1.5, 150.0)
                .unit("ºRø", 21.0 / 40.0, 7.5)
                .build(),
        )
    }

    #[test]
    fn test_convert_celsius_to_fahrenheit() {
        let t = temperature();
        assert_eq!(t.convert(0.0, "ºC", "°F").unwrap(), 32.0);
        assert_eq!(t.convert(100.0, "ºC", "°F").unwrap(), 212.0);
        assert_eq!(t.convert(25.0, "ºC", "°F").unwrap(), 77.0);
    }

    #[test]
    fn test_convert_kelvin_to_celsius() {
        assert_eq!(temperature().convert(0.0, "K", "ºC").unwrap(), -273.15);
    }

    #[test]
    fn test_negative_scale() {
        let t = temperature();
        assert_eq!(t.convert(100.0, "ºC", "ºD").unwrap(), 0.0);
        assert_eq!(t.convert(0.0, "ºC", "ºD").unwrap(), 150.0);
        assert_eq!(t.convert(150.0, "ºD", "ºC").unwrap(), 0.0);
    }

    #[test]
    fn test_identity_through_base() {
        let t = temperature();
        for x in [0.0, -273.15, 1e-300, 42.125, 1e300, f64::MIN_POSITIVE] {
            assert_eq!(t.convert(x, "ºC", "ºC").unwrap(), x);
        }
    }

    #[test]
    fn test_self_conversion_is_computed() {
        // Fahrenheit to Fahrenheit goes through the base; it may carry rounding noise
        let t = temperature();
        let x = 98.6;
        assert_relative_eq!(t.convert(x, "°F", "°F").unwrap(), x, max_relative = 1e-12);
    }

    #[test]
    fn test_round_trip() {
        let t = temperature();
        let units = t.list_units();
        for &u in &units {
            for &v in &units {
                for x in [-40.0, 0.5, 37.0, 1234.5] {
                    let there = t.convert(x, u, v).unwrap();
                    let back = t.convert(there, v, u).unwrap();
                    assert_relative_eq!(back, x, epsilon = 1e-12, max_relative = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_synonyms_agree() {
        let t = temperature();
        for target in t.list_units() {
            for x in [-12.5, 0.0, 99.9] {
                assert_eq!(
                    t.convert(x, "ºC", target).unwrap(),
                    t.convert(x, "Celsius", target).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_unknown_from() {
        let err = temperature().convert(1.0, "not-a-real-unit", "ºC").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit { from: Some("not-a-real-unit".into()), to: None }
        );
        assert_eq!(err.side(), UnknownSide::From);
    }

    #[test]
    fn test_unknown_to() {
        let err = temperature().convert(1.0, "ºC", "ºX").unwrap_err();
        assert_eq!(err.side(), UnknownSide::To);
        assert_eq!(err.names(), vec!["ºX"]);
    }

    #[test]
    fn test_unknown_both() {
        let err = temperature().convert(1.0, "x", "y").unwrap_err();
        assert_eq!(err.side(), UnknownSide::Both);
        assert_eq!(err.names(), vec!["x", "y"]);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let t = temperature();
        assert!(t.has_unit("K"));
        assert!(!t.has_unit("k"));
        assert!(t.convert(1.0, "celsius", "K").is_err());
    }

    #[test]
    fn test_nan_and_infinity_propagate() {
        let t = temperature();
        assert!(t.convert(f64::NAN, "ºC", "°F").unwrap().is_nan());
        assert_eq!(t.convert(f64::INFINITY, "ºC", "ºD").unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_zero_scale_yields_non_finite() {
        let c = Converter::new(
            UnitTable::builder().linear("base", 1.0).linear("broken", 0.0).build(),
        );
        assert!(c.convert(1.0, "broken", "base").unwrap().is_infinite());
    }

    #[test]
    fn test_list_units_in_table_order() {
        assert_eq!(
            temperature().list_units(),
            vec!["ºC", "Celsius", "°F", "K", "ºD", "ºRø"]
        );
    }

    #[test]
    fn test_base_units() {
        assert_eq!(temperature().base_units(), vec!["ºC", "Celsius"]);
    }

    #[test]
    fn test_to_and_from_base() {
        let t = temperature();
        assert_eq!(t.to_base(273.15, "K").unwrap(), 0.0);
        assert_eq!(t.from_base(100.0, "°F").unwrap(), 212.0);
        assert!(t.to_base(1.0, "nope").is_err());
    }

    #[test]
    fn test_base_lookups_report_side() {
        let t = temperature();
        assert_eq!(t.to_base(1.0, "nope").unwrap_err().side(), UnknownSide::From);

        let err = t.from_base(1.0, "nope").unwrap_err();
        assert_eq!(err.side(), UnknownSide::To);
        assert_eq!(err.to_string(), "unknown unit: 'nope' (to)");
    }

    #[test]
    fn test_coefficient() {
        let t = temperature();
        assert_eq!(t.coefficient("°F").unwrap(), UnitCoefficient::new(1.8, 32.0));
        assert_eq!(
            t.coefficient("°G").unwrap_err(),
            ConversionError::unknown("°G")
        );
    }

    #[test]
    fn test_suggest() {
        let t = temperature();
        assert_eq!(t.suggest("celsius"), vec!["Celsius"]);
        assert_eq!(t.suggest("Cel"), vec!["Celsius"]);
        assert!(t.suggest("zzz").is_empty());
        assert!(t.suggest("").is_empty());
    }

    #[test]
    fn test_empty_table() {
        let c = Converter::new(UnitTable::default());
        assert!(c.is_empty());
        assert_eq!(c.len(), 0);
        assert!(c.list_units().is_empty());
        assert!(c.convert(1.0, "a", "b").is_err());
    }

    #[test]
    fn test_shared_across_threads() {
        let t = std::sync::Arc::new(temperature());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let t = t.clone();
                std::thread::spawn(move || t.convert(i as f64 * 10.0, "ºC", "K").unwrap())
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_relative_eq!(h.join().unwrap(), i as f64 * 10.0 + 273.15);
        }
    }
}
