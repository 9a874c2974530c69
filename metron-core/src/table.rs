//! Immutable unit-name → coefficient mapping

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{TableError, UnitCoefficient};

/// Mapping from unit name to its affine coefficient.
///
/// Names are case-sensitive and may contain any symbol (`º`, `µ`, `²`, `Å`).
/// Synonyms are independent entries; nothing is deduplicated. Iteration
/// follows insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitTable {
    entries: Vec<(String, UnitCoefficient)>,
    index: HashMap<String, usize>,
}

impl UnitTable {
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    /// Load a table from a JSON object of `"name": [scale, offset]` pairs
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a table from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn get(&self, name: &str) -> Option<&UnitCoefficient> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unit names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, coefficient)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UnitCoefficient)> {
        self.entries.iter().map(|(name, c)| (name.as_str(), c))
    }

    fn insert(&mut self, name: String, coefficient: UnitCoefficient) {
        // A repeated name keeps its first position and takes the new coefficient
        match self.index.get(&name) {
            Some(&i) => self.entries[i].1 = coefficient,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, coefficient));
            }
        }
    }
}

/// Builder for a [`UnitTable`]
#[derive(Debug, Default)]
pub struct TableBuilder {
    table: UnitTable,
}

impl TableBuilder {
    /// Add a unit with scale and offset
    pub fn unit(&mut self, name: &str, scale: f64, offset: f64) -> &mut Self {
        self.table.insert(name.to_string(), UnitCoefficient::new(scale, offset));
        self
    }

    /// Add a proportional unit (zero offset)
    pub fn linear(&mut self, name: &str, scale: f64) -> &mut Self {
        self.unit(name, scale, 0.0)
    }

    pub fn build(&mut self) -> UnitTable {
        std::mem::take(&mut self.table)
    }
}

impl<S: Into<String>> FromIterator<(S, UnitCoefficient)> for UnitTable {
    fn from_iter<I: IntoIterator<Item = (S, UnitCoefficient)>>(iter: I) -> Self {
        let mut table = UnitTable::default();
        for (name, coefficient) in iter {
            table.insert(name.into(), coefficient);
        }
        table
    }
}

impl<'a> IntoIterator for &'a UnitTable {
    type Item = (&'a str, &'a UnitCoefficient);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl Serialize for UnitTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, coefficient) in &self.entries {
            map.serialize_entry(name, coefficient)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for UnitTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor)
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = UnitTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of unit names to [scale, offset] pairs")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<UnitTable, A::Error> {
        // Visiting entries directly keeps document order
        let mut table = UnitTable::default();
        while let Some((name, coefficient)) = access.next_entry::<String, UnitCoefficient>()? {
            table.insert(name, coefficient);
        }
        Ok(table)
    }
}
