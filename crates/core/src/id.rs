//! Strongly-typed identifiers used across the domain.

use core::borrow::Borrow;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Normalized product code.
///
/// Surrounding whitespace is trimmed on parse and a code that is empty after
/// trimming is rejected, so a `ProductCode` is never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductCode(String);

impl ProductCode {
    /// Normalize and validate a raw code.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_code("code cannot be blank"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Normalize an optional raw code; `None` is as invalid as a blank code.
    pub fn parse_opt(raw: Option<&str>) -> DomainResult<Self> {
        match raw {
            Some(raw) => Self::parse(raw),
            None => Err(DomainError::invalid_code("code is missing")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ProductCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProductCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ProductCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProductCode> for String {
    fn from(value: ProductCode) -> Self {
        value.0
    }
}
