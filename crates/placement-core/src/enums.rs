//! Degree levels, degree filters, and admin roles.
//!
//! `DegreeLevel` serializes with the capitalized names stored in the
//! `jobs.degree_level` column. `AdminRole` uses lowercase, matching
//! `admin_users.role`.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// DegreeLevel
// ---------------------------------------------------------------------------

/// Education tier a job posting is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum DegreeLevel {
    Diploma,
    Bachelor,
    Master,
}

impl DegreeLevel {
    pub const ALL: [Self; 3] = [Self::Diploma, Self::Bachelor, Self::Master];

    /// Return the string representation used in storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diploma => "Diploma",
            Self::Bachelor => "Bachelor",
            Self::Master => "Master",
        }
    }
}

impl fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DegreeLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "degree level",
                value: s.to_string(),
                expected: "Diploma, Bachelor, Master",
            })
    }
}

// ---------------------------------------------------------------------------
// DegreeFilter
// ---------------------------------------------------------------------------

/// Degree selector used by job listings: either every level or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DegreeFilter {
    #[default]
    All,
    Only(DegreeLevel),
}

impl DegreeFilter {
    #[must_use]
    pub fn accepts(self, level: DegreeLevel) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == level,
        }
    }
}

impl From<DegreeLevel> for DegreeFilter {
    fn from(level: DegreeLevel) -> Self {
        Self::Only(level)
    }
}

impl fmt::Display for DegreeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(level) => level.fmt(f),
        }
    }
}

impl FromStr for DegreeFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<DegreeLevel>()
            .map(Self::Only)
            .map_err(|_| CoreError::UnknownVariant {
                kind: "degree filter",
                value: s.to_string(),
                expected: "All, Diploma, Bachelor, Master",
            })
    }
}

// ---------------------------------------------------------------------------
// AdminRole
// ---------------------------------------------------------------------------

/// Role attached to an admin session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    Admin,
    Moderator,
}

impl AdminRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Moderator => "moderator",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_level_serializes_capitalized() {
        let json = serde_json::to_string(&DegreeLevel::Bachelor).unwrap();
        assert_eq!(json, "\"Bachelor\"");
        let back: DegreeLevel = serde_json::from_str("\"Master\"").unwrap();
        assert_eq!(back, DegreeLevel::Master);
    }

    #[test]
    fn degree_level_parses_case_insensitively() {
        assert_eq!("diploma".parse::<DegreeLevel>().unwrap(), DegreeLevel::Diploma);
        assert_eq!(" MASTER ".parse::<DegreeLevel>().unwrap(), DegreeLevel::Master);
        assert_eq!(
            "PhD".parse::<DegreeLevel>().unwrap_err().to_string(),
            "Unknown degree level 'PhD' (expected one of: Diploma, Bachelor, Master)"
        );
    }

    #[test]
    fn degree_filter_parses_all_and_levels() {
        assert_eq!("All".parse::<DegreeFilter>().unwrap(), DegreeFilter::All);
        assert_eq!(
            "bachelor".parse::<DegreeFilter>().unwrap(),
            DegreeFilter::Only(DegreeLevel::Bachelor)
        );
        let err = "everything".parse::<DegreeFilter>().unwrap_err();
        assert!(err.to_string().contains("degree filter"));
    }

    #[test]
    fn degree_filter_accepts() {
        assert!(DegreeFilter::All.accepts(DegreeLevel::Master));
        assert!(DegreeFilter::Only(DegreeLevel::Diploma).accepts(DegreeLevel::Diploma));
        assert!(!DegreeFilter::Only(DegreeLevel::Diploma).accepts(DegreeLevel::Bachelor));
    }

    #[test]
    fn admin_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&AdminRole::Moderator).unwrap(), "\"moderator\"");
        assert_eq!(AdminRole::Admin.to_string(), "admin");
    }
}
