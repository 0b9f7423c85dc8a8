//! Skill proficiency level type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`SkillLevel`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum SkillLevelError {
    /// The value is outside the accepted range.
    #[error("skill level must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Lowest accepted level.
        min: u8,
        /// Highest accepted level.
        max: u8,
        /// The rejected input.
        value: u8,
    },
}

/// A skill proficiency level between 1 and 100.
///
/// Serialized as a bare integer; deserialization rejects out-of-range values
/// so a malformed admin payload surfaces as a structured error instead of
/// being silently clamped.
///
/// ## Examples
///
/// ```
/// use folio_core::SkillLevel;
///
/// assert!(SkillLevel::new(85).is_ok());
/// assert!(SkillLevel::new(0).is_err());
/// assert!(SkillLevel::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SkillLevel(u8);

impl SkillLevel {
    /// Lowest accepted level.
    pub const MIN: u8 = 1;
    /// Highest accepted level.
    pub const MAX: u8 = 100;

    /// Create a `SkillLevel` from a raw integer.
    ///
    /// # Errors
    ///
    /// Returns [`SkillLevelError::OutOfRange`] if the value is not within
    /// 1..=100.
    pub const fn new(value: u8) -> Result<Self, SkillLevelError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(SkillLevelError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                value,
            });
        }
        Ok(Self(value))
    }

    /// Returns the level as a raw integer.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl Default for SkillLevel {
    /// The level a skill gets when the payload omits one (matches the
    /// stored-document default of 80).
    fn default() -> Self {
        Self(80)
    }
}

impl TryFrom<u8> for SkillLevel {
    type Error = SkillLevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SkillLevel> for u8 {
    fn from(level: SkillLevel) -> Self {
        level.0
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(SkillLevel::new(1).unwrap().as_u8(), 1);
        assert_eq!(SkillLevel::new(100).unwrap().as_u8(), 100);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(SkillLevel::new(0).is_err());
        assert!(SkillLevel::new(101).is_err());
    }

    #[test]
    fn default_is_eighty() {
        assert_eq!(SkillLevel::default().as_u8(), 80);
    }

    #[test]
    fn serializes_as_integer() {
        let level = SkillLevel::new(85).unwrap();
        assert_eq!(serde_json::to_string(&level).unwrap(), "85");
    }

    #[test]
    fn deserialization_rejects_out_of_range() {
        let result: Result<SkillLevel, _> = serde_json::from_str("0");
        assert!(result.is_err());

        let result: Result<SkillLevel, _> = serde_json::from_str("250");
        assert!(result.is_err());
    }

    #[test]
    fn deserialization_accepts_valid() {
        let level: SkillLevel = serde_json::from_str("42").unwrap();
        assert_eq!(level.as_u8(), 42);
    }
}
