use crate::error::CoreError;
use crate::plan::{NumberFormat, NumberingPlan, PlanError};
use crate::region::RegionCode;
use crate::sanitize::{clean_phone_number, strip_literal_prefix};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

const MAX_CALLING_CODE: u16 = 999;
const MAX_CALLING_CODE_DIGITS: usize = 3;
const MAX_NATIONAL_LENGTH: usize = 17;

/// Numbering rules for one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionPlan {
    pub code: RegionCode,
    pub calling_code: u16,
    pub international_prefix: Option<String>,
    pub national_prefix: Option<String>,
    pub national_prefix_in_format: bool,
    pub lengths: Vec<usize>,
    pub leading_digits: Vec<String>,
    pub groups: Vec<usize>,
}

impl RegionPlan {
    pub fn new(code: RegionCode, calling_code: u16, lengths: Vec<usize>) -> Self {
        Self {
            code,
            calling_code,
            international_prefix: None,
            national_prefix: None,
            national_prefix_in_format: false,
            lengths,
            leading_digits: Vec::new(),
            groups: Vec::new(),
        }
    }

    pub fn with_international_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.international_prefix = Some(prefix.into());
        self
    }

    pub fn with_national_prefix(mut self, prefix: impl Into<String>, in_format: bool) -> Self {
        self.national_prefix = Some(prefix.into());
        self.national_prefix_in_format = in_format;
        self
    }

    pub fn with_leading_digits<I, S>(mut self, leading: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_digits = leading.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_groups(mut self, groups: Vec<usize>) -> Self {
        self.groups = groups;
        self
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let invalid = |reason: &str| CoreError::InvalidPlan {
            region: self.code.to_string(),
            reason: reason.to_string(),
        };

        if self.calling_code == 0 || self.calling_code > MAX_CALLING_CODE {
            return Err(invalid("calling code must be between 1 and 999"));
        }
        if self.lengths.is_empty() {
            return Err(invalid("at least one national number length is required"));
        }
        if self
            .lengths
            .iter()
            .any(|len| *len == 0 || *len > MAX_NATIONAL_LENGTH)
        {
            return Err(invalid("national number lengths must be between 1 and 17"));
        }
        if let Some(prefix) = &self.international_prefix {
            if !is_digit_string(prefix) {
                return Err(invalid("international prefix must be digits"));
            }
        }
        if let Some(prefix) = &self.national_prefix {
            if !is_digit_string(prefix) {
                return Err(invalid("national prefix must be digits"));
            }
        }
        if self.national_prefix_in_format && self.national_prefix.is_none() {
            return Err(invalid("national prefix in format requires a national prefix"));
        }
        if self.leading_digits.iter().any(|lead| !is_digit_string(lead)) {
            return Err(invalid("leading digits must be digits"));
        }
        if self.groups.contains(&0) {
            return Err(invalid("format groups must be positive"));
        }
        Ok(())
    }

    pub fn accepts(&self, national: &str) -> bool {
        if !is_digit_string(national) || !self.lengths.contains(&national.len()) {
            return false;
        }
        self.leading_digits.is_empty()
            || self
                .leading_digits
                .iter()
                .any(|lead| national.starts_with(lead.as_str()))
    }

    fn grouped(&self, national: &str) -> String {
        if self.groups.is_empty() {
            return national.to_string();
        }

        let mut parts: Vec<&str> = Vec::new();
        let mut rest = national;
        for size in &self.groups {
            if rest.is_empty() {
                break;
            }
            let split = (*size).min(rest.len());
            let (head, tail) = rest.split_at(split);
            parts.push(head);
            rest = tail;
        }
        if !rest.is_empty() {
            parts.push(rest);
        }
        parts.join(" ")
    }
}

fn is_digit_string(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedNumber {
    pub country_code: u16,
    pub national_number: String,
    pub region: RegionCode,
}

/// A numbering plan described entirely by [`RegionPlan`] entries.
///
/// Regions sharing a calling code are consulted in insertion order, so the
/// first one listed acts as the main region for that code.
#[derive(Debug, Clone, Default)]
pub struct PlanTable {
    regions: Vec<RegionPlan>,
    by_code: HashMap<RegionCode, usize>,
    by_calling_code: BTreeMap<u16, Vec<usize>>,
}

impl PlanTable {
    pub fn new(regions: Vec<RegionPlan>) -> Result<Self, CoreError> {
        let mut table = Self::default();
        for plan in regions {
            table.insert(plan)?;
        }
        Ok(table)
    }

    pub fn insert(&mut self, plan: RegionPlan) -> Result<(), CoreError> {
        plan.validate()?;
        if self.by_code.contains_key(&plan.code) {
            return Err(CoreError::DuplicateRegion(plan.code.to_string()));
        }
        let index = self.regions.len();
        self.by_code.insert(plan.code.clone(), index);
        self.by_calling_code
            .entry(plan.calling_code)
            .or_default()
            .push(index);
        self.regions.push(plan);
        Ok(())
    }

    pub fn region(&self, code: &RegionCode) -> Option<&RegionPlan> {
        self.by_code.get(code).map(|index| &self.regions[*index])
    }

    pub fn regions(&self) -> impl Iterator<Item = &RegionPlan> {
        self.regions.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    fn regions_for_calling_code(&self, calling_code: u16) -> impl Iterator<Item = &RegionPlan> {
        self.by_calling_code
            .get(&calling_code)
            .into_iter()
            .flatten()
            .map(|index| &self.regions[*index])
    }

    fn parse_international(&self, digits: &str) -> Result<ParsedNumber, PlanError> {
        let mut known_code = false;
        for len in 1..=MAX_CALLING_CODE_DIGITS.min(digits.len()) {
            let (code, national) = digits.split_at(len);
            if code.starts_with('0') {
                break;
            }
            let Ok(calling_code) = code.parse::<u16>() else {
                continue;
            };
            let mut candidates = self.regions_for_calling_code(calling_code).peekable();
            if candidates.peek().is_none() {
                continue;
            }
            known_code = true;
            if let Some(plan) = candidates.find(|plan| plan.accepts(national)) {
                return Ok(ParsedNumber {
                    country_code: calling_code,
                    national_number: national.to_string(),
                    region: plan.code.clone(),
                });
            }
        }

        if known_code {
            Err(PlanError::InvalidNumber)
        } else {
            Err(PlanError::UnknownCallingCode)
        }
    }

    fn parse_national(&self, home: &RegionPlan, digits: &str) -> Option<ParsedNumber> {
        let mut forms = Vec::with_capacity(2);
        if let Some(stripped) = home
            .national_prefix
            .as_deref()
            .and_then(|prefix| strip_literal_prefix(digits, prefix))
        {
            forms.push(stripped);
        }
        forms.push(digits);

        let siblings = std::iter::once(home).chain(
            self.regions_for_calling_code(home.calling_code)
                .filter(|plan| plan.code != home.code),
        );
        let siblings: Vec<&RegionPlan> = siblings.collect();

        for national in forms {
            if let Some(plan) = siblings.iter().find(|plan| plan.accepts(national)) {
                return Some(ParsedNumber {
                    country_code: home.calling_code,
                    national_number: national.to_string(),
                    region: plan.code.clone(),
                });
            }
        }
        None
    }
}

impl NumberingPlan for PlanTable {
    type Number = ParsedNumber;

    fn parse(&self, number: &str, region: &RegionCode) -> Result<ParsedNumber, PlanError> {
        let home = self
            .region(region)
            .ok_or_else(|| PlanError::UnknownRegion(region.clone()))?;

        let cleaned = clean_phone_number(number);
        let (explicit_plus, rest) = match cleaned.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, cleaned.as_str()),
        };
        if !rest.chars().any(|ch| ch.is_ascii_digit()) {
            return Err(PlanError::NoDigits);
        }
        if !is_digit_string(rest) {
            return Err(PlanError::InvalidNumber);
        }

        if explicit_plus {
            return self.parse_international(rest);
        }
        if let Some(after_prefix) = home
            .international_prefix
            .as_deref()
            .and_then(|prefix| strip_literal_prefix(rest, prefix))
        {
            return self.parse_international(after_prefix);
        }
        if let Some(parsed) = self.parse_national(home, rest) {
            return Ok(parsed);
        }
        self.parse_international(rest)
            .map_err(|_| PlanError::InvalidNumber)
    }

    fn format(&self, number: &ParsedNumber, kind: NumberFormat) -> String {
        let plan = self.region(&number.region);
        let grouped = plan
            .map(|plan| plan.grouped(&number.national_number))
            .unwrap_or_else(|| number.national_number.clone());

        match kind {
            NumberFormat::E164 => format!("+{}{}", number.country_code, number.national_number),
            NumberFormat::International => format!("+{} {}", number.country_code, grouped),
            NumberFormat::National => match plan {
                Some(RegionPlan {
                    national_prefix: Some(prefix),
                    national_prefix_in_format: true,
                    ..
                }) => format!("{} {}", prefix, grouped),
                _ => grouped,
            },
        }
    }

    fn region_of(&self, number: &ParsedNumber) -> Option<RegionCode> {
        Some(number.region.clone())
    }

    fn country_code(&self, number: &ParsedNumber) -> u16 {
        number.country_code
    }

    fn calling_code_for(&self, region: &RegionCode) -> Option<u16> {
        self.region(region).map(|plan| plan.calling_code)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{PlanTable, RegionPlan};
    use crate::region::RegionCode;

    fn code(raw: &str) -> RegionCode {
        RegionCode::new(raw).expect("region code")
    }

    pub(crate) fn sample_table() -> PlanTable {
        PlanTable::new(vec![
            RegionPlan::new(code("US"), 1, vec![10])
                .with_international_prefix("011")
                .with_national_prefix("1", false)
                .with_leading_digits(["201", "202", "212", "310", "415", "541", "617", "718"])
                .with_groups(vec![3, 3, 4]),
            RegionPlan::new(code("CA"), 1, vec![10])
                .with_international_prefix("011")
                .with_national_prefix("1", false)
                .with_leading_digits(["416", "514", "604"])
                .with_groups(vec![3, 3, 4]),
            RegionPlan::new(code("NO"), 47, vec![8])
                .with_international_prefix("00")
                .with_leading_digits(["2", "3", "4", "6", "7", "9"])
                .with_groups(vec![3, 2, 3]),
            RegionPlan::new(code("LT"), 370, vec![8])
                .with_international_prefix("00")
                .with_national_prefix("8", true)
                .with_leading_digits(["3", "4", "5", "6"])
                .with_groups(vec![1, 3, 4]),
            RegionPlan::new(code("PL"), 48, vec![9])
                .with_international_prefix("00")
                .with_leading_digits(["5", "6", "7", "8"])
                .with_groups(vec![3, 3, 3]),
            RegionPlan::new(code("TK"), 690, vec![4, 5, 6, 7])
                .with_international_prefix("00")
                .with_leading_digits(["2", "3", "4", "5", "7", "8", "9"]),
        ])
        .expect("sample table")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_table;
    use super::{PlanTable, RegionPlan};
    use crate::error::CoreError;
    use crate::plan::{NumberFormat, NumberingPlan, PlanError};
    use crate::region::RegionCode;

    fn code(raw: &str) -> RegionCode {
        RegionCode::new(raw).unwrap()
    }

    #[test]
    fn parses_national_form_with_and_without_trunk_prefix() {
        let table = sample_table();
        let plain = table.parse("(541) 754-3010", &code("US")).unwrap();
        let prefixed = table.parse("1 541 754 3010", &code("US")).unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(plain.country_code, 1);
        assert_eq!(plain.national_number, "5417543010");
    }

    #[test]
    fn explicit_plus_selects_region_by_calling_code() {
        let table = sample_table();
        let parsed = table.parse("+47 474 73 204", &code("US")).unwrap();
        assert_eq!(parsed.region.as_str(), "NO");
        assert_eq!(parsed.national_number, "47473204");
    }

    #[test]
    fn international_access_prefix_of_the_region_is_honoured() {
        let table = sample_table();
        let parsed = table.parse("0114747473204", &code("US")).unwrap();
        assert_eq!(parsed.region.as_str(), "NO");

        let foreign = table.parse("0114747473204", &code("NO"));
        assert_eq!(foreign, Err(PlanError::InvalidNumber));
    }

    #[test]
    fn shared_calling_code_falls_through_to_sibling_region() {
        let table = sample_table();
        let parsed = table.parse("604 555 1234", &code("US")).unwrap();
        assert_eq!(parsed.region.as_str(), "CA");
        assert_eq!(parsed.country_code, 1);
    }

    #[test]
    fn bare_calling_code_is_recognised_after_national_attempt() {
        let table = sample_table();
        let parsed = table.parse("690300400", &code("US")).unwrap();
        assert_eq!(parsed.region.as_str(), "TK");
        assert_eq!(parsed.national_number, "300400");

        let polish = table.parse("690300400", &code("PL")).unwrap();
        assert_eq!(polish.region.as_str(), "PL");
    }

    #[test]
    fn failures_are_reported_as_values() {
        let table = sample_table();
        assert_eq!(
            table.parse("5417543010", &code("DE")),
            Err(PlanError::UnknownRegion(code("DE")))
        );
        assert_eq!(table.parse("call me", &code("US")), Err(PlanError::NoDigits));
        assert_eq!(table.parse("+0123", &code("US")), Err(PlanError::UnknownCallingCode));
        assert_eq!(table.parse("+1 999", &code("US")), Err(PlanError::InvalidNumber));
        assert_eq!(table.parse("541*7543010", &code("US")), Err(PlanError::InvalidNumber));
    }

    #[test]
    fn formats_use_region_groups() {
        let table = sample_table();
        let us = table.parse("5417543010", &code("US")).unwrap();
        assert_eq!(table.format(&us, NumberFormat::E164), "+15417543010");
        assert_eq!(table.format(&us, NumberFormat::National), "541 754 3010");
        assert_eq!(table.format(&us, NumberFormat::International), "+1 541 754 3010");

        let lt = table.parse("852367019", &code("LT")).unwrap();
        assert_eq!(table.format(&lt, NumberFormat::National), "8 5 236 7019");
        assert_eq!(table.format(&lt, NumberFormat::International), "+370 5 236 7019");
    }

    #[test]
    fn ungrouped_region_formats_unbroken() {
        let table = sample_table();
        let tk = table.parse("+690 3004", &code("TK")).unwrap();
        assert_eq!(table.format(&tk, NumberFormat::National), "3004");
        assert_eq!(table.format(&tk, NumberFormat::International), "+690 3004");
    }

    #[test]
    fn calling_code_lookup() {
        let table = sample_table();
        assert_eq!(table.calling_code_for(&code("NO")), Some(47));
        assert_eq!(table.calling_code_for(&code("DE")), None);
    }

    #[test]
    fn duplicate_regions_are_rejected() {
        let plan = RegionPlan::new(code("NO"), 47, vec![8]);
        let err = PlanTable::new(vec![plan.clone(), plan]).unwrap_err();
        assert_eq!(err, CoreError::DuplicateRegion("NO".to_string()));
    }

    #[test]
    fn invalid_plans_are_rejected() {
        let no_lengths = RegionPlan::new(code("NO"), 47, Vec::new());
        assert!(matches!(
            no_lengths.validate(),
            Err(CoreError::InvalidPlan { .. })
        ));

        let bad_prefix = RegionPlan::new(code("NO"), 47, vec![8]).with_international_prefix("+");
        assert!(bad_prefix.validate().is_err());

        let bad_code = RegionPlan::new(code("NO"), 1000, vec![8]);
        assert!(bad_code.validate().is_err());
    }
}
