//! Portfolio-entry domain types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Room/space category a portfolio piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Living,
    Bedroom,
    Office,
    Commercial,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::Living,
        ProjectCategory::Bedroom,
        ProjectCategory::Office,
        ProjectCategory::Commercial,
    ];

    /// Canonical string representation, matching the database CHECK constraint.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Living => "living",
            Self::Bedroom => "bedroom",
            Self::Office => "office",
            Self::Commercial => "commercial",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = InvalidCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| InvalidCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid project category: {0:?}")]
pub struct InvalidCategory(pub String);

/// Physical dimensions of a piece, stored as JSONB alongside the row.
///
/// The unit is free text (the site shows `cm` and `m`); no conversion
/// happens server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub unit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_strings() {
        for category in ProjectCategory::ALL {
            assert_eq!(
                category.as_str().parse::<ProjectCategory>().unwrap(),
                category
            );
        }
        assert!("garage".parse::<ProjectCategory>().is_err());
    }

    #[test]
    fn dimensions_serialize_with_expected_keys() {
        let dims = Dimensions {
            length: 180.0,
            width: 90.0,
            height: 75.0,
            unit: "cm".to_string(),
        };
        let value = serde_json::to_value(&dims).unwrap();
        assert_eq!(value["length"], 180.0);
        assert_eq!(value["unit"], "cm");
    }
}
