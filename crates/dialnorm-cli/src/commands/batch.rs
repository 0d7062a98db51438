use crate::commands::{print_json, region_label, Context};
use crate::error::invalid_input;
use crate::util::parse_region_hint;
use anyhow::{Context as _, Result};
use clap::Args;
use dialnorm_core::{NormalizedResult, RegionCode};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// File with one number per line; stdin when omitted
    pub file: Option<PathBuf>,
    /// Separates a number from its region hint
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
}

#[derive(Debug, Serialize)]
struct BatchItemDto {
    line: usize,
    input: String,
    hint: Option<RegionCode>,
    #[serde(flatten)]
    result: NormalizedResult,
}

pub fn batch(ctx: &Context<'_>, args: BatchArgs) -> Result<()> {
    let reader: Box<dyn BufRead> = match &args.file {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("open input {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin().lock())),
    };

    let mut items = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("read line {}", line_number))?;
        let Some((input, hint)) = split_line(&line, args.delimiter, line_number)? else {
            continue;
        };
        let result = ctx.engine.normalize(&input, hint.as_ref());
        items.push(BatchItemDto {
            line: line_number,
            input,
            hint,
            result,
        });
    }

    let parsed = items.iter().filter(|item| item.result.is_parsed()).count();
    debug!(
        total = items.len(),
        parsed,
        rejected = items.len() - parsed,
        "batch finished"
    );

    if ctx.json {
        print_json(&items)?;
        return Ok(());
    }

    for item in items {
        match &item.result {
            NormalizedResult::Parsed(number) => println!(
                "{}\t{}\t{}",
                item.input,
                number.e164,
                region_label(number)
            ),
            NormalizedResult::Rejected => println!("{}\trejected", item.input),
        }
    }
    Ok(())
}

fn split_line(
    line: &str,
    delimiter: char,
    line_number: usize,
) -> Result<Option<(String, Option<RegionCode>)>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    match trimmed.rsplit_once(delimiter) {
        Some((input, region)) => {
            let input = input.trim();
            if input.is_empty() {
                return Err(invalid_input(format!("line {}: missing number", line_number)));
            }
            let hint = parse_region_hint(Some(region))
                .with_context(|| format!("line {}", line_number))?;
            Ok(Some((input.to_string(), hint)))
        }
        None => Ok(Some((trimmed.to_string(), None))),
    }
}
