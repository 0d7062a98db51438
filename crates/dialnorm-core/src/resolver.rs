use crate::plan::{NumberFormat, NumberingPlan};
use crate::sanitize::digits_only_without_leading_zeros;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    /// The parse is attributed to a calling code other than the default
    /// region's, so there is nothing to second-guess.
    NotApplicable,
    Ambiguous {
        input_digits: String,
        canonical_digits: String,
    },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Ambiguous { .. })
    }
}

/// Checks a default-region guess against the raw input.
///
/// When the parsed calling code is the default region's own, the digits of
/// the raw input (leading zeros dropped) must equal the digits of the
/// canonical E.164 form. `default_calling_code` is `None` when the plan does
/// not know the default region, in which case every parse is taken as is.
pub fn resolve<P: NumberingPlan>(
    plan: &P,
    raw: &str,
    number: &P::Number,
    default_calling_code: Option<u16>,
) -> Verdict {
    if default_calling_code != Some(plan.country_code(number)) {
        return Verdict::NotApplicable;
    }

    let canonical = plan.format(number, NumberFormat::E164);
    let input_digits = digits_only_without_leading_zeros(raw);
    let canonical_digits = digits_only_without_leading_zeros(&canonical);
    if input_digits == canonical_digits {
        Verdict::Accepted
    } else {
        Verdict::Ambiguous {
            input_digits,
            canonical_digits,
        }
    }
}
