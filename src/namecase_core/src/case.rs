use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The naming convention requested for a generated client.
///
/// `None` leaves every identifier as the API document spelled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameCase {
    None,
    Camel,
    Snake,
    Pascal,
}

impl NameCase {
    /// Returns the convention to convert with, or `None` when names pass
    /// through untouched.
    pub fn as_case(self) -> Option<Case> {
        match self {
            NameCase::None => None,
            NameCase::Camel => Some(Case::Camel),
            NameCase::Snake => Some(Case::Snake),
            NameCase::Pascal => Some(Case::Pascal),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NameCase::None => "none",
            NameCase::Camel => "camel",
            NameCase::Snake => "snake",
            NameCase::Pascal => "pascal",
        }
    }
}

impl Default for NameCase {
    fn default() -> Self {
        NameCase::None
    }
}

impl From<Case> for NameCase {
    fn from(case: Case) -> Self {
        match case {
            Case::Camel => NameCase::Camel,
            Case::Snake => NameCase::Snake,
            Case::Pascal => NameCase::Pascal,
        }
    }
}

impl fmt::Display for NameCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNameCaseError {
    #[error("unknown name case '{0}', expected one of: none, camel, snake, pascal")]
    Unknown(String),
}

impl FromStr for NameCase {
    type Err = ParseNameCaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(NameCase::None),
            "camel" => Ok(NameCase::Camel),
            "snake" => Ok(NameCase::Snake),
            "pascal" => Ok(NameCase::Pascal),
            _ => Err(ParseNameCaseError::Unknown(s.to_owned())),
        }
    }
}

/// A naming convention that actually renames identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Camel,
    Snake,
    Pascal,
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        NameCase::from(*self).fmt(f)
    }
}
