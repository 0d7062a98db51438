//! libphonenumber metadata as a [`NumberingPlan`].

use dialnorm_core::{
    clean_phone_number, digits_only, NumberFormat, NumberingPlan, PlanError, RegionCode,
};
use phonenumber::metadata::DATABASE;
use phonenumber::{country, Mode, PhoneNumber};

#[derive(Debug, Clone, Copy, Default)]
pub struct LibPhoneNumber;

impl LibPhoneNumber {
    pub fn new() -> Self {
        Self
    }
}

fn country_id(region: &RegionCode) -> Result<country::Id, PlanError> {
    region
        .as_str()
        .parse::<country::Id>()
        .map_err(|_| PlanError::UnknownRegion(region.clone()))
}

fn valid(number: PhoneNumber) -> Result<PhoneNumber, PlanError> {
    if phonenumber::is_valid(&number) {
        Ok(number)
    } else {
        Err(PlanError::InvalidNumber)
    }
}

/// Reads the leading digits as a country calling code, as if dialled with `+`.
fn leading_calling_code(cleaned: &str) -> Option<PhoneNumber> {
    let international = format!("+{}", digits_only(cleaned));
    phonenumber::parse(None, &international)
        .ok()
        .filter(phonenumber::is_valid)
}

impl NumberingPlan for LibPhoneNumber {
    type Number = PhoneNumber;

    fn parse(&self, number: &str, region: &RegionCode) -> Result<PhoneNumber, PlanError> {
        let id = country_id(region)?;
        let cleaned = clean_phone_number(number);
        if !cleaned.chars().any(|ch| ch.is_ascii_digit()) {
            return Err(PlanError::NoDigits);
        }
        let regional = phonenumber::parse(Some(id), &cleaned)
            .map_err(|err| PlanError::Rejected(err.to_string()))
            .and_then(valid);
        match regional {
            Ok(parsed) => Ok(parsed),
            Err(err) if cleaned.starts_with('+') => Err(err),
            Err(err) => leading_calling_code(&cleaned).ok_or(err),
        }
    }

    fn format(&self, number: &PhoneNumber, kind: NumberFormat) -> String {
        let mode = match kind {
            NumberFormat::E164 => Mode::E164,
            NumberFormat::National => Mode::National,
            NumberFormat::International => Mode::International,
        };
        number.format().mode(mode).to_string()
    }

    fn region_of(&self, number: &PhoneNumber) -> Option<RegionCode> {
        let id = number.country().id()?;
        RegionCode::new(&format!("{id:?}")).ok()
    }

    fn country_code(&self, number: &PhoneNumber) -> u16 {
        number.code().value()
    }

    fn calling_code_for(&self, region: &RegionCode) -> Option<u16> {
        DATABASE
            .by_id(region.as_str())
            .map(|metadata| metadata.country_code())
    }
}
