use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid region code: {0}")]
    InvalidRegionCode(String),
    #[error("invalid plan for region {region}: {reason}")]
    InvalidPlan { region: String, reason: String },
    #[error("duplicate region in plan: {0}")]
    DuplicateRegion(String),
    #[error("invalid international prefix: {0}")]
    InvalidPrefix(String),
}
