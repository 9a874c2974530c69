//! Converter Registry

use std::collections::HashMap;
use std::sync::Arc;

use metron_core::Converter;
use metron_tables::Quantity;
use tracing::debug;

use crate::MetronError;

/// Named conversion engines, one per quantity.
///
/// Names are matched case-insensitively. Engines are immutable and handed
/// out as shared references, so a registry can be read from many threads.
#[derive(Debug, Clone, Default)]
pub struct ConverterRegistry {
    converters: HashMap<String, Arc<Converter>>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self {
            converters: HashMap::new(),
        }
    }

    /// Registry holding the six built-in quantities
    pub fn standard() -> Self {
        let registry = Quantity::ALL
            .iter()
            .fold(Self::new(), |registry, q| registry.with_quantity(*q));
        debug!(quantities = registry.converters.len(), "standard registry built");
        registry
    }

    pub fn with_converter(mut self, name: &str, converter: Converter) -> Self {
        self.insert(name, converter);
        self
    }

    pub fn with_quantity(self, quantity: Quantity) -> Self {
        self.with_converter(quantity.name(), quantity.converter())
    }

    /// Register a converter, returning the one it replaced
    pub fn insert(&mut self, name: &str, converter: Converter) -> Option<Arc<Converter>> {
        self.converters.insert(name.to_lowercase(), Arc::new(converter))
    }

    pub fn get(&self, name: &str) -> Option<&Converter> {
        self.converters.get(&name.to_lowercase()).map(|c| c.as_ref())
    }

    /// Shared handle to a converter, for callers that outlive the registry borrow
    pub fn shared(&self, name: &str) -> Option<Arc<Converter>> {
        self.converters.get(&name.to_lowercase()).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.converters.contains_key(&name.to_lowercase())
    }

    /// Registered quantity names, sorted
    pub fn quantities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.converters.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Look up a converter, with similar names in the error
    pub fn converter(&self, quantity: &str) -> Result<&Converter, MetronError> {
        self.get(quantity).ok_or_else(|| MetronError::UnknownQuantity {
            name: quantity.to_string(),
            similar: self.find_similar_quantities(quantity),
        })
    }

    /// Convert within one quantity
    pub fn convert(&self, quantity: &str, value: f64, from: &str, to: &str) -> Result<f64, MetronError> {
        let converter = self.converter(quantity)?;
        converter.convert(value, from, to).map_err(|source| {
            // Up to five suggestions per bad name
            let mut suggestions: Vec<String> = Vec::new();
            for name in source.names() {
                for candidate in converter.suggest(name).into_iter().take(5) {
                    if !suggestions.iter().any(|s| s == candidate) {
                        suggestions.push(candidate.to_string());
                    }
                }
            }
            MetronError::Conversion { source, suggestions }
        })
    }

    pub fn has_unit(&self, quantity: &str, unit: &str) -> Result<bool, MetronError> {
        Ok(self.converter(quantity)?.has_unit(unit))
    }

    pub fn list_units(&self, quantity: &str) -> Result<Vec<&str>, MetronError> {
        Ok(self.converter(quantity)?.list_units())
    }

    /// Find quantity names similar to the given name (for error suggestions)
    fn find_similar_quantities(&self, name: &str) -> Vec<String> {
        let name_lower = name.to_lowercase();
        let mut matches: Vec<(&str, usize)> = self
            .converters
            .keys()
            .filter_map(|candidate| {
                let score = Self::similarity_score(&name_lower, candidate);
                (score > 0).then_some((candidate.as_str(), score))
            })
            .collect();

        // Higher score first, then alphabetical for a stable order
        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        matches.into_iter().map(|(name, _)| name.to_string()).collect()
    }

    /// Calculate similarity score between two strings
    fn similarity_score(query: &str, candidate: &str) -> usize {
        if query.is_empty() {
            return 0;
        }

        let mut score = 0;

        // Exact prefix match is best
        if candidate.starts_with(query) {
            score += 100;
        }
        // Contains the query
        else if candidate.contains(query) {
            score += 50;
        }

        // Shared leading characters catch transpositions like "lenght"
        let common_prefix = query
            .chars()
            .zip(candidate.chars())
            .take_while(|(a, b)| a == b)
            .count();
        if common_prefix >= 3 {
            score += common_prefix * 10;
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use metron_core::{ConversionError, UnitTable};

    #[test]
    fn test_standard_registry() {
        let registry = ConverterRegistry::standard();
        assert_eq!(registry.len(), 6);
        assert_eq!(
            registry.quantities(),
            vec!["area", "length", "speed", "temperature", "volume", "weight"]
        );
    }

    #[test]
    fn test_case_insensitive_quantity() {
        let registry = ConverterRegistry::standard();
        assert!(registry.contains("Temperature"));
        assert_eq!(registry.convert("TEMPERATURE", 0.0, "ºC", "°F").unwrap(), 32.0);
    }

    #[test]
    fn test_unit_names_stay_case_sensitive() {
        let registry = ConverterRegistry::standard();
        assert!(registry.has_unit("length", "Mm").unwrap());
        assert!(registry.has_unit("length", "mm").unwrap());
        let mega = registry.convert("length", 1.0, "Mm", "m").unwrap();
        let milli = registry.convert("length", 1.0, "mm", "m").unwrap();
        assert_relative_eq!(mega, 1e6, max_relative = 1e-12);
        assert_relative_eq!(milli, 1e-3, max_relative = 1e-12);
    }

    #[test]
    fn test_unknown_quantity_suggests() {
        let registry = ConverterRegistry::standard();
        match registry.convert("lenght", 1.0, "m", "km") {
            Err(MetronError::UnknownQuantity { name, similar }) => {
                assert_eq!(name, "lenght");
                assert_eq!(similar, vec!["length".to_string()]);
            }
            other => panic!("expected UnknownQuantity, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_unit_suggests() {
        let registry = ConverterRegistry::standard();
        let err = registry.convert("temperature", 1.0, "kelvin", "ºC").unwrap_err();
        match &err {
            MetronError::Conversion { source, suggestions } => {
                assert_eq!(
                    source,
                    &ConversionError::UnknownUnit { from: Some("kelvin".into()), to: None }
                );
                assert_eq!(suggestions[0], "Kelvin");
            }
            other => panic!("expected Conversion, got {:?}", other),
        }
        assert!(err.to_string().contains("did you mean: Kelvin"));
    }

    #[test]
    fn test_never_crosses_quantities() {
        let registry = ConverterRegistry::standard();
        let err = registry.convert("length", 1.0, "m", "kg").unwrap_err();
        assert!(matches!(err, MetronError::Conversion { .. }));
    }

    #[test]
    fn test_custom_converter() {
        let time = Converter::new(
            UnitTable::builder()
                .linear("s", 1.0)
                .linear("min", 1.0 / 60.0)
                .linear("h", 1.0 / 3600.0)
                .build(),
        );
        let registry = ConverterRegistry::new().with_converter("Time", time);
        assert_relative_eq!(registry.convert("time", 2.0, "h", "min").unwrap(), 120.0, max_relative = 1e-12);
        assert_eq!(registry.list_units("time").unwrap(), vec!["s", "min", "h"]);
    }

    #[test]
    fn test_insert_replaces() {
        let mut registry = ConverterRegistry::standard();
        let replacement = Converter::new(UnitTable::builder().linear("m", 1.0).build());
        let old = registry.insert("length", replacement);
        assert_eq!(old.map(|c| c.len()), Some(213));
        assert_eq!(registry.get("length").map(|c| c.len()), Some(1));
    }

    #[test]
    fn test_shared_handle() {
        let registry = ConverterRegistry::standard();
        let speed = registry.shared("speed").unwrap();
        drop(registry);
        assert_relative_eq!(speed.convert(36.0, "km/h", "m/s").unwrap(), 10.0, max_relative = 1e-12);
    }

    #[test]
    fn test_similarity_score() {
        assert!(ConverterRegistry::similarity_score("temp", "temperature") >= 100);
        assert_eq!(ConverterRegistry::similarity_score("xyz", "length"), 0);
        assert_eq!(ConverterRegistry::similarity_score("", "length"), 0);
    }
}
