//! Contact-submission lifecycle policy and language tags.
//!
//! The status set is a fixed membership check, not a transition graph:
//! any member value may replace any other. Values outside the set are
//! rejected at the store boundary before any row is touched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Follow-up status of a customer inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Contacted,
    Quoted,
    Completed,
    Cancelled,
}

impl SubmissionStatus {
    /// Every legal status value, in workflow order.
    pub const ALL: [SubmissionStatus; 5] = [
        SubmissionStatus::Pending,
        SubmissionStatus::Contacted,
        SubmissionStatus::Quoted,
        SubmissionStatus::Completed,
        SubmissionStatus::Cancelled,
    ];

    /// Canonical string representation, matching the database CHECK constraint.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Contacted => "contacted",
            Self::Quoted => "quoted",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| InvalidStatus(s.to_string()))
    }
}

/// Rejection for a status value outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid submission status: {0:?}")]
pub struct InvalidStatus(pub String);

/// Language a submission or page was authored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Am,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Am => "am",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = InvalidLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "am" => Ok(Self::Am),
            other => Err(InvalidLanguage(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid language tag: {0:?} (expected \"en\" or \"am\")")]
pub struct InvalidLanguage(pub String);
