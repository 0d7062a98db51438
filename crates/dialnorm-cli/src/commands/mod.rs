use crate::engine::Engine;
use anyhow::Result;
use dialnorm_config::AppConfig;
use dialnorm_core::{FormattedNumber, NormalizedResult};
use serde::Serialize;
use std::io::{self, Write};

pub mod batch;
pub mod completions;
pub mod explain;
pub mod normalize;
pub mod regions;

pub struct Context<'a> {
    pub engine: &'a Engine,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub fn region_label(number: &FormattedNumber) -> &str {
    number
        .region
        .as_ref()
        .map(|region| region.as_str())
        .unwrap_or("-")
}

pub fn result_summary(result: &NormalizedResult) -> String {
    match result {
        NormalizedResult::Parsed(number) => format!("{} ({})", number.e164, region_label(number)),
        NormalizedResult::Rejected => "rejected".to_string(),
    }
}
