//! Conversion and table-loading errors

use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which side of a conversion named a unit missing from the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSide {
    From,
    To,
    Both,
}

/// Errors raised by the conversion engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// One or both unit names are absent from the bound table.
    ///
    /// Each field holds the offending name, or `None` if that side was valid.
    #[error("{}", describe_unknown(.from.as_deref(), .to.as_deref()))]
    UnknownUnit {
        from: Option<String>,
        to: Option<String>,
    },
}

fn describe_unknown(from: Option<&str>, to: Option<&str>) -> String {
    match (from, to) {
        (Some(f), Some(t)) => format!("unknown units: '{}' (from) and '{}' (to)", f, t),
        (Some(f), None) => format!("unknown unit: '{}' (from)", f),
        (None, Some(t)) => format!("unknown unit: '{}' (to)", t),
        (None, None) => "unknown unit".to_string(),
    }
}

impl ConversionError {
    /// Error for a single lookup outside of a conversion
    pub fn unknown(name: impl Into<String>) -> Self {
        ConversionError::UnknownUnit { from: Some(name.into()), to: None }
    }

    /// Which side was invalid
    pub fn side(&self) -> UnknownSide {
        match self {
            ConversionError::UnknownUnit { from: Some(_), to: Some(_) } => UnknownSide::Both,
            ConversionError::UnknownUnit { to: Some(_), .. } => UnknownSide::To,
            ConversionError::UnknownUnit { .. } => UnknownSide::From,
        }
    }

    /// The offending names, source first
    pub fn names(&self) -> Vec<&str> {
        match self {
            ConversionError::UnknownUnit { from, to } => {
                from.iter().chain(to.iter()).map(|s| s.as_str()).collect()
            }
        }
    }
}

/// Errors raised while loading a unit table from configuration
#[derive(Debug, Error)]
pub enum TableError {
    #[error("cannot read unit table {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid unit table: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_from() {
        let err = ConversionError::UnknownUnit { from: Some("parsec-ish".into()), to: None };
        assert_eq!(err.side(), UnknownSide::From);
        assert_eq!(err.names(), vec!["parsec-ish"]);
        assert_eq!(err.to_string(), "unknown unit: 'parsec-ish' (from)");
    }

    #[test]
    fn test_side_to() {
        let err = ConversionError::UnknownUnit { from: None, to: Some("furlongs".into()) };
        assert_eq!(err.side(), UnknownSide::To);
        assert_eq!(err.names(), vec!["furlongs"]);
        assert_eq!(err.to_string(), "unknown unit: 'furlongs' (to)");
    }

    #[test]
    fn test_side_both() {
        let err = ConversionError::UnknownUnit {
            from: Some("a?".into()),
            to: Some("b?".into()),
        };
        assert_eq!(err.side(), UnknownSide::Both);
        assert_eq!(err.names(), vec!["a?", "b?"]);
        assert!(err.to_string().contains("'a?' (from) and 'b?' (to)"));
    }

    #[test]
    fn test_unknown_helper() {
        let err = ConversionError::unknown("xyz");
        assert_eq!(err.names(), vec!["xyz"]);
    }

    #[test]
    fn test_table_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TableError = json_err.into();
        assert!(err.to_string().starts_with("invalid unit table:"));
    }
}
