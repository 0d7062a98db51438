use crate::normalizer::NormalizerOptions;
use crate::region::RegionCode;
use crate::sanitize::{clean_phone_number, strip_literal_prefix};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "prefix", rename_all = "snake_case")]
pub enum CandidateStrategy {
    Hinted,
    AsGiven,
    StrippedPrefix(String),
}

/// One string/region pair to submit to the numbering plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub number: String,
    pub region: RegionCode,
    pub strategy: CandidateStrategy,
}

impl Candidate {
    /// Only guesses made under the default region go through the ambiguity check.
    pub fn needs_ambiguity_check(&self) -> bool {
        !matches!(self.strategy, CandidateStrategy::Hinted)
    }
}

/// Ordered attempts for `raw`.
///
/// A hint yields exactly one candidate. Without one, the input is tried as
/// given under the default region, then once per matching access prefix with
/// that prefix removed, in the configured order.
pub fn generate_candidates(
    raw: &str,
    hint: Option<&RegionCode>,
    options: &NormalizerOptions,
) -> Vec<Candidate> {
    let cleaned = clean_phone_number(raw);

    if let Some(region) = hint {
        return vec![Candidate {
            number: cleaned,
            region: region.clone(),
            strategy: CandidateStrategy::Hinted,
        }];
    }

    let mut out = Vec::with_capacity(1 + options.international_prefixes.len());
    out.push(Candidate {
        number: cleaned.clone(),
        region: options.default_region.clone(),
        strategy: CandidateStrategy::AsGiven,
    });
    for prefix in &options.international_prefixes {
        if let Some(stripped) = strip_literal_prefix(&cleaned, prefix) {
            out.push(Candidate {
                number: stripped.to_string(),
                region: options.default_region.clone(),
                strategy: CandidateStrategy::StrippedPrefix(prefix.clone()),
            });
        }
    }
    out
}
