use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::checklist::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramType {
    Undergraduate,
    Graduate,
    Doctoral,
}

impl ProgramType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Undergraduate, Self::Graduate, Self::Doctoral]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Undergraduate => "undergraduate",
            Self::Graduate => "graduate",
            Self::Doctoral => "doctoral",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Undergraduate => "Undergraduate",
            Self::Graduate => "Graduate (Master's)",
            Self::Doctoral => "Doctoral (PhD)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationTier {
    Low,
    Medium,
    High,
}

impl LocationTier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Cost of Living",
            Self::Medium => "Medium Cost of Living",
            Self::High => "High Cost of Living",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeLevel {
    Undergraduate,
    Graduate,
    Doctoral,
    Postdoc,
}

impl DegreeLevel {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Undergraduate,
            Self::Graduate,
            Self::Doctoral,
            Self::Postdoc,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Undergraduate => "undergraduate",
            Self::Graduate => "graduate",
            Self::Doctoral => "doctoral",
            Self::Postdoc => "postdoc",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Undergraduate => "Undergraduate",
            Self::Graduate => "Graduate (Master's)",
            Self::Doctoral => "Doctoral (PhD)",
            Self::Postdoc => "Postdoctoral",
        }
    }
}

/// Which closed input set a rejected value was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionField {
    ProgramType,
    LocationTier,
    DegreeLevel,
}

impl fmt::Display for SelectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ProgramType => "program type",
            Self::LocationTier => "location tier",
            Self::DegreeLevel => "degree level",
        };
        f.write_str(name)
    }
}

fn parse_closed<T: Copy>(
    raw: &str,
    candidates: &[T],
    key: fn(T) -> &'static str,
    field: SelectionField,
) -> Result<T, GuideError> {
    let needle = raw.trim().to_ascii_lowercase();
    candidates
        .iter()
        .copied()
        .find(|candidate| key(*candidate) == needle)
        .ok_or_else(|| GuideError::InvalidSelection {
            field,
            value: raw.to_string(),
        })
}

impl FromStr for ProgramType {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed(s, &Self::ordered(), Self::key, SelectionField::ProgramType)
    }
}

impl FromStr for LocationTier {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed(s, &Self::ordered(), Self::key, SelectionField::LocationTier)
    }
}

impl FromStr for DegreeLevel {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed(s, &Self::ordered(), Self::key, SelectionField::DegreeLevel)
    }
}

impl fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Failures surfaced by the estimator, timeline generator, and checklist store.
#[derive(Debug, thiserror::Error)]
pub enum GuideError {
    #[error("'{value}' is not a valid {field}")]
    InvalidSelection {
        field: SelectionField,
        value: String,
    },
    #[error("no timeline data for {degree} (requested semester '{semester}')")]
    NoTimelineData {
        degree: DegreeLevel,
        semester: String,
    },
    #[error("checklist item {index} is out of range for {degree} ({len} items)")]
    IndexOutOfRange {
        degree: DegreeLevel,
        index: usize,
        len: usize,
    },
    #[error(transparent)]
    Storage(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_closed_sets_case_insensitively() {
        assert_eq!(
            " Doctoral ".parse::<ProgramType>().expect("parses"),
            ProgramType::Doctoral
        );
        assert_eq!(
            "HIGH".parse::<LocationTier>().expect("parses"),
            LocationTier::High
        );
        assert_eq!(
            "postdoc".parse::<DegreeLevel>().expect("parses"),
            DegreeLevel::Postdoc
        );
    }

    #[test]
    fn postdoc_is_not_a_program_type() {
        let err = "postdoc".parse::<ProgramType>().expect_err("rejected");
        match err {
            GuideError::InvalidSelection { field, value } => {
                assert_eq!(field, SelectionField::ProgramType);
                assert_eq!(value, "postdoc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn keys_round_trip_through_serde() {
        for degree in DegreeLevel::ordered() {
            let encoded = serde_json::to_string(&degree).expect("serializes");
            assert_eq!(encoded, format!("\"{}\"", degree.key()));
        }
    }
}
