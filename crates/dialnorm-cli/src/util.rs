use crate::error::invalid_input;
use anyhow::Result;
use dialnorm_core::{CandidateStrategy, RegionCode};

pub fn parse_region_hint(raw: Option<&str>) -> Result<Option<RegionCode>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid_input("region cannot be empty"));
    }
    RegionCode::new(trimmed)
        .map(Some)
        .map_err(|_| invalid_input(format!("invalid region: {trimmed} (expected two letters)")))
}

pub fn strategy_label(strategy: &CandidateStrategy) -> String {
    match strategy {
        CandidateStrategy::Hinted => "hinted".to_string(),
        CandidateStrategy::AsGiven => "as given".to_string(),
        CandidateStrategy::StrippedPrefix(prefix) => format!("stripped {}", prefix),
    }
}
