pub mod table;

use crate::region::RegionCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use table::{ParsedNumber, PlanTable, RegionPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    E164,
    National,
    International,
}

/// Reasons a numbering plan refuses a string. These drive candidate
/// iteration and never reach callers of `Normalizer::normalize`.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum PlanError {
    #[error("unknown region: {0}")]
    UnknownRegion(RegionCode),
    #[error("no digits in input")]
    NoDigits,
    #[error("unknown country calling code")]
    UnknownCallingCode,
    #[error("not a valid number for the region")]
    InvalidNumber,
    #[error("rejected by numbering plan: {0}")]
    Rejected(String),
}

/// The numbering-plan authority the normalizer consults.
///
/// Implementations are queried read-only and may be shared across threads.
pub trait NumberingPlan {
    type Number;

    fn parse(&self, number: &str, region: &RegionCode) -> Result<Self::Number, PlanError>;

    fn format(&self, number: &Self::Number, kind: NumberFormat) -> String;

    fn region_of(&self, number: &Self::Number) -> Option<RegionCode>;

    fn country_code(&self, number: &Self::Number) -> u16;

    fn calling_code_for(&self, region: &RegionCode) -> Option<u16>;
}

impl<P: NumberingPlan + ?Sized> NumberingPlan for &P {
    type Number = P::Number;

    fn parse(&self, number: &str, region: &RegionCode) -> Result<Self::Number, PlanError> {
        (**self).parse(number, region)
    }

    fn format(&self, number: &Self::Number, kind: NumberFormat) -> String {
        (**self).format(number, kind)
    }

    fn region_of(&self, number: &Self::Number) -> Option<RegionCode> {
        (**self).region_of(number)
    }

    fn country_code(&self, number: &Self::Number) -> u16 {
        (**self).country_code(number)
    }

    fn calling_code_for(&self, region: &RegionCode) -> Option<u16> {
        (**self).calling_code_for(region)
    }
}
