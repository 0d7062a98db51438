use crate::candidates::Candidate;
use crate::plan::PlanError;
use crate::region::RegionCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedNumber {
    pub e164: String,
    pub national: String,
    pub international: String,
    pub region: Option<RegionCode>,
}

/// Outcome of one normalization. Invalid input and input refused by the
/// ambiguity policy both surface as `Rejected`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NormalizedResult {
    Parsed(FormattedNumber),
    Rejected,
}

impl NormalizedResult {
    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }

    pub fn parsed(&self) -> Option<&FormattedNumber> {
        match self {
            Self::Parsed(number) => Some(number),
            Self::Rejected => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AttemptOutcome {
    ParseFailed {
        error: PlanError,
    },
    Ambiguous {
        input_digits: String,
        canonical_digits: String,
    },
    Accepted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attempt {
    pub candidate: Candidate,
    #[serde(flatten)]
    pub outcome: AttemptOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub attempts: Vec<Attempt>,
    pub result: NormalizedResult,
}
