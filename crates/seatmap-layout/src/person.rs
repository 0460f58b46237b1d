//! Roster entries.
//!
//! The declared sex of a person is free text in the roster. It is resolved
//! once, when the person is built, into a closed [`SexGroup`] so the arranger
//! never compares strings.

use std::fmt;

/// One of the three partitions of a roster used by same-sex pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", rename_all = "lowercase")
)]
pub enum SexGroup {
    Male,
    Female,
    /// Anything that is neither `male` nor `female`, including empty text.
    #[default]
    Other,
}

impl SexGroup {
    /// Resolve declared text, ignoring ASCII case.
    ///
    /// Only an exact (case-insensitive) `male` or `female` maps to the
    /// corresponding group. Surrounding whitespace is not trimmed.
    pub fn parse(declared: &str) -> Self {
        if declared.eq_ignore_ascii_case("male") {
            Self::Male
        } else if declared.eq_ignore_ascii_case("female") {
            Self::Female
        } else {
            Self::Other
        }
    }

    /// Lowercase label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl From<&str> for SexGroup {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for SexGroup {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl fmt::Display for SexGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    /// Roster number (student number, badge id, ...)
    pub number: i64,
    /// Display name
    pub name: String,
    /// Resolved sex-group
    pub sex: SexGroup,
}

impl Person {
    /// Create a person, resolving the declared sex text.
    pub fn new(number: i64, name: impl Into<String>, sex: &str) -> Self {
        Self {
            number,
            name: name.into(),
            sex: SexGroup::parse(sex),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number, self.name)
    }
}
