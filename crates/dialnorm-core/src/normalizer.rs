use crate::candidates::generate_candidates;
use crate::error::CoreError;
use crate::plan::{NumberFormat, NumberingPlan};
use crate::region::RegionCode;
use crate::resolver::{resolve, Verdict};
use crate::result::{Attempt, AttemptOutcome, Explanation, FormattedNumber, NormalizedResult};

pub const DEFAULT_REGION: &str = "US";
pub const DEFAULT_INTERNATIONAL_PREFIXES: [&str; 2] = ["011", "00"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerOptions {
    /// Region assumed for every attempt when the caller gives no hint.
    pub default_region: RegionCode,
    /// Access prefixes stripped from hint-less input, tried in order.
    pub international_prefixes: Vec<String>,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            default_region: RegionCode::new_unchecked(DEFAULT_REGION),
            international_prefixes: DEFAULT_INTERNATIONAL_PREFIXES
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
        }
    }
}

impl NormalizerOptions {
    pub fn new(default_region: RegionCode) -> Self {
        Self {
            default_region,
            ..Self::default()
        }
    }

    pub fn with_international_prefixes<I, S>(mut self, prefixes: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefixes: Vec<String> = prefixes.into_iter().map(Into::into).collect();
        if let Some(bad) = prefixes
            .iter()
            .find(|prefix| prefix.is_empty() || !prefix.chars().all(|ch| ch.is_ascii_digit()))
        {
            return Err(CoreError::InvalidPrefix(bad.clone()));
        }
        self.international_prefixes = prefixes;
        Ok(self)
    }
}

/// Picks at most one interpretation of a raw phone number.
#[derive(Debug, Clone)]
pub struct Normalizer<P> {
    plan: P,
    options: NormalizerOptions,
}

impl<P: NumberingPlan> Normalizer<P> {
    pub fn new(plan: P) -> Self {
        Self::with_options(plan, NormalizerOptions::default())
    }

    pub fn with_options(plan: P, options: NormalizerOptions) -> Self {
        Self { plan, options }
    }

    pub fn normalize(&self, raw: &str, hint: Option<&RegionCode>) -> NormalizedResult {
        self.run(raw, hint, |_| {})
    }

    /// Same search as [`Normalizer::normalize`], keeping every attempt.
    pub fn explain(&self, raw: &str, hint: Option<&RegionCode>) -> Explanation {
        let mut attempts = Vec::new();
        let result = self.run(raw, hint, |attempt| attempts.push(attempt));
        Explanation { attempts, result }
    }

    fn run(
        &self,
        raw: &str,
        hint: Option<&RegionCode>,
        mut record: impl FnMut(Attempt),
    ) -> NormalizedResult {
        let default_calling_code = self.plan.calling_code_for(&self.options.default_region);

        for candidate in generate_candidates(raw, hint, &self.options) {
            let number = match self.plan.parse(&candidate.number, &candidate.region) {
                Ok(number) => number,
                Err(error) => {
                    record(Attempt {
                        candidate,
                        outcome: AttemptOutcome::ParseFailed { error },
                    });
                    continue;
                }
            };

            if candidate.needs_ambiguity_check() {
                if let Verdict::Ambiguous {
                    input_digits,
                    canonical_digits,
                } = resolve(&self.plan, raw, &number, default_calling_code)
                {
                    record(Attempt {
                        candidate,
                        outcome: AttemptOutcome::Ambiguous {
                            input_digits,
                            canonical_digits,
                        },
                    });
                    continue;
                }
            }

            record(Attempt {
                candidate,
                outcome: AttemptOutcome::Accepted,
            });
            return NormalizedResult::Parsed(self.formatted(&number));
        }

        NormalizedResult::Rejected
    }

    fn formatted(&self, number: &P::Number) -> FormattedNumber {
        FormattedNumber {
            e164: self.plan.format(number, NumberFormat::E164),
            national: self.plan.format(number, NumberFormat::National),
            international: self.plan.format(number, NumberFormat::International),
            region: self.plan.region_of(number),
        }
    }
}

/// Normalizes with default options against `plan`.
pub fn normalize<P: NumberingPlan>(
    plan: &P,
    raw: &str,
    hint: Option<&RegionCode>,
) -> NormalizedResult {
    Normalizer::new(plan).normalize(raw, hint)
}

#[cfg(test)]
mod tests {
    use super::{normalize, Normalizer, NormalizerOptions};
    use crate::error::CoreError;
    use crate::plan::table::fixtures::sample_table;
    use crate::plan::PlanError;
    use crate::region::RegionCode;
    use crate::result::{AttemptOutcome, NormalizedResult};

    fn code(raw: &str) -> RegionCode {
        RegionCode::new(raw).unwrap()
    }

    fn e164(result: &NormalizedResult) -> Option<&str> {
        result.parsed().map(|number| number.e164.as_str())
    }

    #[test]
    fn full_international_digits_parse_without_hint() {
        let table = sample_table();
        let result = normalize(&table, "15417543010", None);
        let number = result.parsed().expect("parsed");
        assert_eq!(number.e164, "+15417543010");
        assert_eq!(number.national, "541 754 3010");
        assert_eq!(number.international, "+1 541 754 3010");
        assert_eq!(number.region, Some(code("US")));
    }

    #[test]
    fn national_digits_need_a_hint() {
        let table = sample_table();
        assert_eq!(normalize(&table, "5417543010", None), NormalizedResult::Rejected);

        let hinted = normalize(&table, "5417543010", Some(&code("US")));
        assert_eq!(e164(&hinted), Some("+15417543010"));
    }

    #[test]
    fn hinted_parse_failure_is_final() {
        let table = sample_table();
        let normalizer = Normalizer::new(&table);
        let explanation = normalizer.explain("004747473204", Some(&code("US")));
        assert_eq!(explanation.attempts.len(), 1);
        assert_eq!(explanation.result, NormalizedResult::Rejected);
    }

    #[test]
    fn ambiguous_attempt_moves_on_to_next_candidate() {
        let table = sample_table();
        let normalizer = Normalizer::new(&table);
        let explanation = normalizer.explain("01115417543010", None);
        assert_eq!(explanation.attempts.len(), 2);
        assert!(explanation
            .attempts
            .iter()
            .all(|attempt| matches!(attempt.outcome, AttemptOutcome::Ambiguous { .. })));
        assert_eq!(explanation.result, NormalizedResult::Rejected);
    }

    #[test]
    fn explain_records_failures_before_acceptance() {
        let table = sample_table();
        let normalizer = Normalizer::new(&table);
        let explanation = normalizer.explain("004747473204", None);
        assert_eq!(explanation.attempts.len(), 2);
        assert_eq!(
            explanation.attempts[0].outcome,
            AttemptOutcome::ParseFailed {
                error: PlanError::InvalidNumber
            }
        );
        assert_eq!(explanation.attempts[1].outcome, AttemptOutcome::Accepted);
        assert_eq!(e164(&explanation.result), Some("+4747473204"));
        assert_eq!(explanation.result, normalizer.normalize("004747473204", None));
    }

    #[test]
    fn default_region_is_configurable() {
        let table = sample_table();
        let options = NormalizerOptions::new(code("NO"));
        let normalizer = Normalizer::with_options(&table, options);

        let result = normalizer.normalize("4747473204", None);
        assert_eq!(e164(&result), Some("+4747473204"));
        let prefixed = normalizer.normalize("004747473204", None);
        assert_eq!(e164(&prefixed), Some("+4747473204"));
        assert_eq!(normalizer.normalize("47473204", None), NormalizedResult::Rejected);
    }

    #[test]
    fn unknown_default_region_rejects_all_input() {
        let table = sample_table();
        let normalizer = Normalizer::with_options(&table, NormalizerOptions::new(code("DE")));
        assert_eq!(normalizer.normalize("+4747473204", None), NormalizedResult::Rejected);
        assert!(normalizer
            .normalize("47473204", Some(&code("NO")))
            .is_parsed());
    }

    #[test]
    fn prefixes_must_be_digits() {
        let err = NormalizerOptions::default()
            .with_international_prefixes(["011", "+"])
            .unwrap_err();
        assert_eq!(err, CoreError::InvalidPrefix("+".to_string()));
        assert!(NormalizerOptions::default()
            .with_international_prefixes(Vec::<String>::new())
            .is_ok());
    }
}
