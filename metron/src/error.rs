//! Errors surfaced by the registry and configuration loader

use metron_core::{ConversionError, TableError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetronError {
    /// No converter is registered under this quantity name
    #[error("unknown quantity: {name}{}", hint(.similar))]
    UnknownQuantity { name: String, similar: Vec<String> },

    /// The engine rejected a unit name
    #[error("{source}{}", hint(.suggestions))]
    Conversion {
        #[source]
        source: ConversionError,
        suggestions: Vec<String>,
    },

    #[error(transparent)]
    Table(#[from] TableError),
}

fn hint(candidates: &[String]) -> String {
    if candidates.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", candidates.join(", "))
    }
}

impl MetronError {
    /// Suggested replacements, if any
    pub fn suggestions(&self) -> &[String] {
        match self {
            MetronError::UnknownQuantity { similar, .. } => similar,
            MetronError::Conversion { suggestions, .. } => suggestions,
            MetronError::Table(_) => &[],
        }
    }
}
