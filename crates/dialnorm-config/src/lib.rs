use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dialnorm_core::{CoreError, NormalizerOptions, PlanTable, RegionCode, RegionPlan};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "dialnorm";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub normalizer: NormalizerOptions,
    pub authority: AuthorityKind,
    pub plan: PlanTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorityKind {
    /// Regions listed under `[[regions]]`.
    Table,
    /// libphonenumber metadata.
    Phonenumber,
}

impl AuthorityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Phonenumber => "phonenumber",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            normalizer: NormalizerOptions::default(),
            authority: AuthorityKind::Phonenumber,
            plan: PlanTable::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid default_region value: {0}")]
    InvalidDefaultRegion(String),
    #[error("invalid international_prefixes value: {0}")]
    InvalidInternationalPrefix(String),
    #[error("invalid region entry {index}: {source}")]
    InvalidRegion {
        index: usize,
        #[source]
        source: CoreError,
    },
    #[error("authority \"table\" requires at least one [[regions]] entry")]
    EmptyPlan,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_region: Option<String>,
    international_prefixes: Option<Vec<String>>,
    authority: Option<AuthorityKind>,
    regions: Option<Vec<RegionFile>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegionFile {
    code: String,
    calling_code: u16,
    international_prefix: Option<String>,
    national_prefix: Option<String>,
    national_prefix_in_format: Option<bool>,
    lengths: Vec<usize>,
    leading_digits: Option<Vec<String>>,
    groups: Option<Vec<usize>>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

pub fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let parsed: ConfigFile = toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    merge_config(parsed)
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(parse_config(&contents, path)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(raw) = parsed.default_region {
        let region =
            RegionCode::new(&raw).map_err(|_| ConfigError::InvalidDefaultRegion(raw.clone()))?;
        config.normalizer.default_region = region;
    }

    if let Some(prefixes) = parsed.international_prefixes {
        config.normalizer = config
            .normalizer
            .with_international_prefixes(prefixes)
            .map_err(|err| match err {
                CoreError::InvalidPrefix(prefix) => ConfigError::InvalidInternationalPrefix(prefix),
                other => ConfigError::InvalidInternationalPrefix(other.to_string()),
            })?;
    }

    let regions = parsed.regions.unwrap_or_default();
    let has_regions = !regions.is_empty();
    for (index, region) in regions.into_iter().enumerate() {
        let plan = region_plan(region).map_err(|source| ConfigError::InvalidRegion { index, source })?;
        config
            .plan
            .insert(plan)
            .map_err(|source| ConfigError::InvalidRegion { index, source })?;
    }

    config.authority = match parsed.authority {
        Some(kind) => kind,
        None if has_regions => AuthorityKind::Table,
        None => AuthorityKind::Phonenumber,
    };
    if config.authority == AuthorityKind::Table && config.plan.is_empty() {
        return Err(ConfigError::EmptyPlan);
    }

    Ok(config)
}

fn region_plan(file: RegionFile) -> std::result::Result<RegionPlan, CoreError> {
    let code = RegionCode::new(&file.code)?;
    let mut plan = RegionPlan::new(code, file.calling_code, file.lengths);
    if let Some(prefix) = file.international_prefix {
        plan = plan.with_international_prefix(prefix);
    }
    if let Some(prefix) = file.national_prefix {
        plan = plan.with_national_prefix(prefix, file.national_prefix_in_format.unwrap_or(false));
    } else if file.national_prefix_in_format == Some(true) {
        plan.national_prefix_in_format = true;
    }
    if let Some(leading) = file.leading_digits {
        plan = plan.with_leading_digits(leading);
    }
    if let Some(groups) = file.groups {
        plan = plan.with_groups(groups);
    }
    Ok(plan)
}
