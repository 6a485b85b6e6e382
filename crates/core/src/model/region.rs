use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    #[error("region name must not be blank")]
    BlankRegionName,
}

/// Name of a clickable map region, matched exactly (case and whitespace included).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegionName(String);

impl RegionName {
    /// Creates a new `RegionName`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::BlankRegionName` if the name is empty or whitespace only.
    pub fn new(name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::BlankRegionName);
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RegionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionName({:?})", self.0)
    }
}

impl fmt::Display for RegionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RegionName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RegionName {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RegionName> for String {
    fn from(value: RegionName) -> Self {
        value.0
    }
}

impl Borrow<str> for RegionName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RegionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_name_display() {
        let name = RegionName::new("北京").unwrap();
        assert_eq!(name.to_string(), "北京");
    }

    #[test]
    fn region_name_from_str() {
        let name: RegionName = "上海".parse().unwrap();
        assert_eq!(name.as_str(), "上海");
    }

    #[test]
    fn region_name_rejects_blank() {
        assert_eq!("   ".parse::<RegionName>(), Err(ModelError::BlankRegionName));
        assert_eq!(RegionName::new(""), Err(ModelError::BlankRegionName));
    }

    #[test]
    fn region_name_keeps_exact_text() {
        let padded = RegionName::new(" 天津").unwrap();
        let plain = RegionName::new("天津").unwrap();
        assert_ne!(padded, plain);
    }

    #[test]
    fn region_name_deserialize_rejects_blank() {
        let result = serde_json::from_str::<RegionName>("\"  \"");
        assert!(result.is_err());
    }
}
