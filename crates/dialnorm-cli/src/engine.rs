use anyhow::Result;
use dialnorm_config::{AppConfig, AuthorityKind};
use dialnorm_core::{Explanation, NormalizedResult, Normalizer, PlanTable, RegionCode};

#[cfg(feature = "phonenumber")]
use dialnorm_phonenumber::LibPhoneNumber;

/// The configured normalizer, whichever numbering plan backs it.
pub enum Engine {
    Table(Normalizer<PlanTable>),
    #[cfg(feature = "phonenumber")]
    Phonenumber(Normalizer<LibPhoneNumber>),
}

impl Engine {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        match config.authority {
            AuthorityKind::Table => Ok(Self::Table(Normalizer::with_options(
                config.plan.clone(),
                config.normalizer.clone(),
            ))),
            AuthorityKind::Phonenumber => phonenumber_engine(config),
        }
    }

    pub fn normalize(&self, raw: &str, hint: Option<&RegionCode>) -> NormalizedResult {
        match self {
            Self::Table(normalizer) => normalizer.normalize(raw, hint),
            #[cfg(feature = "phonenumber")]
            Self::Phonenumber(normalizer) => normalizer.normalize(raw, hint),
        }
    }

    pub fn explain(&self, raw: &str, hint: Option<&RegionCode>) -> Explanation {
        match self {
            Self::Table(normalizer) => normalizer.explain(raw, hint),
            #[cfg(feature = "phonenumber")]
            Self::Phonenumber(normalizer) => normalizer.explain(raw, hint),
        }
    }
}

#[cfg(feature = "phonenumber")]
fn phonenumber_engine(config: &AppConfig) -> Result<Engine> {
    Ok(Engine::Phonenumber(Normalizer::with_options(
        LibPhoneNumber::new(),
        config.normalizer.clone(),
    )))
}

#[cfg(not(feature = "phonenumber"))]
fn phonenumber_engine(_config: &AppConfig) -> Result<Engine> {
    Err(crate::error::unavailable(
        "built without the phonenumber authority; a config file with [[regions]] entries is required",
    ))
}

#[cfg(test)]
mod tests {
    use super::Engine;
    use dialnorm_config::AppConfig;

    #[cfg(feature = "phonenumber")]
    #[test]
    fn default_config_uses_phonenumber_authority() {
        let engine = Engine::from_config(&AppConfig::default()).expect("engine");
        assert!(matches!(engine, Engine::Phonenumber(_)));
        assert!(engine.normalize("+15417543010", None).is_parsed());
    }

    #[cfg(not(feature = "phonenumber"))]
    #[test]
    fn default_config_without_phonenumber_asks_for_regions() {
        let err = match Engine::from_config(&AppConfig::default()) {
            Ok(_) => panic!("engine should be unavailable"),
            Err(err) => err,
        };
        assert!(err.to_string().contains("[[regions]]"));
        assert_eq!(
            crate::error::exit_code_for(&err),
            std::process::ExitCode::from(crate::error::EXIT_INVALID_INPUT)
        );
    }
}
