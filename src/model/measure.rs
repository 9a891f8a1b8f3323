//! Stored numeric attributes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// A numeric attribute as stored in the document, in twips (1/20 pt).
///
/// The raw text is kept verbatim so that a malformed value survives a
/// load/save cycle and can be reported instead of silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measure {
    raw: String,
}

/// A stored measure that is not a finite number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a numeric value: {raw:?}")]
pub struct MeasureParseError {
    /// The offending text
    pub raw: String,
}

impl Measure {
    /// Create a measure from a whole number of twips.
    pub fn twips(value: i64) -> Self {
        Self {
            raw: value.to_string(),
        }
    }

    /// Create a measure from stored text, valid or not.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The stored text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parse the stored value.
    pub fn value(&self) -> Result<f64, MeasureParseError> {
        self.raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| MeasureParseError {
                raw: self.raw.clone(),
            })
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Measure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Ok(v) = self.raw.parse::<i64>() {
            return serializer.serialize_i64(v);
        }
        match self.value() {
            Ok(v) => serializer.serialize_f64(v),
            Err(_) => serializer.serialize_str(&self.raw),
        }
    }
}

impl<'de> Deserialize<'de> for Measure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Stored {
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(match Stored::deserialize(deserializer)? {
            Stored::Int(v) => Measure::twips(v),
            Stored::Float(v) => Measure::from_raw(v.to_string()),
            Stored::Text(s) => Measure::from_raw(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value() {
        assert_eq!(Measure::twips(420).value(), Ok(420.0));
        assert_eq!(Measure::from_raw(" 360 ").value(), Ok(360.0));
        assert!(Measure::from_raw("abc").value().is_err());
        assert!(Measure::from_raw("NaN").value().is_err());
    }

    #[test]
    fn test_json_forms() {
        let m: Measure = serde_json::from_str("1417").unwrap();
        assert_eq!(m.raw(), "1417");

        let m: Measure = serde_json::from_str("\"12pt\"").unwrap();
        assert!(m.value().is_err());
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"12pt\"");

        assert_eq!(serde_json::to_string(&Measure::twips(360)).unwrap(), "360");
    }
}
