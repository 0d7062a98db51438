pub mod candidates;
pub mod error;
pub mod normalizer;
pub mod plan;
pub mod region;
pub mod resolver;
pub mod result;
pub mod sanitize;

pub use candidates::{generate_candidates, Candidate, CandidateStrategy};
pub use error::CoreError;
pub use normalizer::{normalize, Normalizer, NormalizerOptions};
pub use plan::{NumberFormat, NumberingPlan, ParsedNumber, PlanError, PlanTable, RegionPlan};
pub use region::RegionCode;
pub use resolver::{resolve, Verdict};
pub use result::{Attempt, AttemptOutcome, Explanation, FormattedNumber, NormalizedResult};
pub use sanitize::{clean_phone_number, digits_only, digits_only_without_leading_zeros};
