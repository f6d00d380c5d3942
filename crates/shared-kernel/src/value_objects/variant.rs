// crates/shared-kernel/src/value_objects/variant.rs
use std::{
    fmt,
    path::{Component, Path},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Variants published by default, in page order.
pub const DEFAULT_VARIANTS: [&str; 9] = [
    "standard",
    "antichess",
    "atomic",
    "chess960",
    "crazyhouse",
    "horde",
    "kingOfTheHill",
    "racingKings",
    "threeCheck",
];

/// Identifier of a chess variant. Doubles as a directory name under the
/// source root and as a URL path segment, so it must be a single plain path
/// component.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(try_from = "String", into = "String")]
pub struct Variant(String);

impl Variant {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let reject = |reason: &str| DomainError::InvalidVariant {
            name: name.clone(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(reject("name is empty"));
        }
        if name.contains('\0') {
            return Err(reject("name contains null bytes"));
        }
        if name.contains(['/', '\\']) {
            return Err(reject("name contains a path separator"));
        }

        let mut components = Path::new(&name).components();
        let plain = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !plain {
            return Err(reject("name must be a plain directory name"));
        }

        Ok(Self(name))
    }

    /// The nine variants in their default order.
    pub fn defaults() -> Vec<Self> {
        DEFAULT_VARIANTS
            .iter()
            .map(|name| Self((*name).to_string()))
            .collect()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Variant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Variant {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Variant> for String {
    fn from(value: Variant) -> Self {
        value.0
    }
}

impl AsRef<str> for Variant {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for Variant {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
