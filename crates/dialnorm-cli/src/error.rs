use anyhow::Error;
use dialnorm_config::ConfigError;
use dialnorm_core::CoreError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_REJECTED: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("rejected: {0}")]
    Rejected(String),
    #[error("unavailable: {0}")]
    #[cfg_attr(feature = "phonenumber", allow(dead_code))]
    Unavailable(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn rejected(input: impl Into<String>) -> Error {
    CliError::Rejected(input.into()).into()
}

#[cfg(not(feature = "phonenumber"))]
pub fn unavailable(message: impl Into<String>) -> Error {
    CliError::Unavailable(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::InvalidInput(_) | CliError::Unavailable(_) => EXIT_INVALID_INPUT,
                CliError::Rejected(_) => EXIT_REJECTED,
            });
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir | ConfigError::Read { .. } => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidDefaultRegion(_)
        | ConfigError::InvalidInternationalPrefix(_)
        | ConfigError::InvalidRegion { .. }
        | ConfigError::EmptyPlan
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
