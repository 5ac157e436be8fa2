use serde::Serialize;

use super::domain::{GuideError, LocationTier, ProgramType};
use super::tables::{cost_breakdown, DOCTORAL_FUNDING_NOTE};

/// Annual cost components in whole US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub tuition: u32,
    pub living: u32,
    pub books: u32,
    pub insurance: u32,
    pub misc: u32,
}

impl CostBreakdown {
    pub fn total(&self) -> u32 {
        self.tuition + self.living + self.books + self.insurance + self.misc
    }

    pub fn line_items(&self) -> Vec<CostLineItem> {
        [
            ("tuition", "Tuition & Fees", self.tuition),
            ("living", "Living Expenses", self.living),
            ("books", "Books & Supplies", self.books),
            ("insurance", "Health Insurance", self.insurance),
            ("misc", "Miscellaneous", self.misc),
        ]
        .into_iter()
        .map(|(key, label, amount)| CostLineItem {
            key,
            label,
            amount,
            formatted: format_usd(amount),
        })
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostLineItem {
    pub key: &'static str,
    pub label: &'static str,
    pub amount: u32,
    pub formatted: String,
}

/// Itemized estimate for one program/location selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostEstimate {
    pub program_type: ProgramType,
    pub location: LocationTier,
    pub breakdown: CostBreakdown,
    pub total: u32,
    /// Display-only annotation; never part of the computed amounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

impl CostEstimate {
    pub fn line_items(&self) -> Vec<CostLineItem> {
        self.breakdown.line_items()
    }

    pub fn formatted_total(&self) -> String {
        format_usd(self.total)
    }
}

pub struct CostEstimator;

impl CostEstimator {
    pub fn estimate(program: ProgramType, location: LocationTier) -> CostEstimate {
        let breakdown = cost_breakdown(program, location);
        let note = match program {
            ProgramType::Doctoral => Some(DOCTORAL_FUNDING_NOTE),
            ProgramType::Undergraduate | ProgramType::Graduate => None,
        };

        CostEstimate {
            program_type: program,
            location,
            total: breakdown.total(),
            breakdown,
            note,
        }
    }

    /// Estimate from raw selection values.
    ///
    /// Returns `Ok(None)` when either value is missing or blank, which callers treat as
    /// "nothing selected yet" rather than a failure.
    pub fn estimate_selection(
        program: Option<&str>,
        location: Option<&str>,
    ) -> Result<Option<CostEstimate>, GuideError> {
        let (Some(program), Some(location)) = (non_blank(program), non_blank(location)) else {
            return Ok(None);
        };

        let program: ProgramType = program.parse()?;
        let location: LocationTier = location.parse()?;
        Ok(Some(Self::estimate(program, location)))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.trim().is_empty())
}

/// Formats whole dollars as `$12,345`.
pub fn format_usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
