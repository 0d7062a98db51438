use crate::commands::{print_json, region_label, Context};
use crate::error::rejected;
use crate::util::{parse_region_hint, strategy_label};
use anyhow::Result;
use clap::Args;
use dialnorm_core::{AttemptOutcome, NormalizedResult, RegionCode};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    pub input: String,
    /// Two-letter region the number belongs to
    #[arg(long, short)]
    pub region: Option<String>,
}

#[derive(Debug, Serialize)]
struct NormalizeDto<'a> {
    input: &'a str,
    hint: Option<&'a RegionCode>,
    #[serde(flatten)]
    result: &'a NormalizedResult,
}

pub fn normalize(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let hint = parse_region_hint(args.region.as_deref())?;
    let explanation = ctx.engine.explain(&args.input, hint.as_ref());
    for attempt in &explanation.attempts {
        debug!(
            number = %attempt.candidate.number,
            region = %attempt.candidate.region,
            strategy = %strategy_label(&attempt.candidate.strategy),
            accepted = matches!(attempt.outcome, AttemptOutcome::Accepted),
            "candidate attempted"
        );
    }
    let result = explanation.result;

    if ctx.json {
        print_json(&NormalizeDto {
            input: &args.input,
            hint: hint.as_ref(),
            result: &result,
        })?;
    } else if let NormalizedResult::Parsed(number) = &result {
        println!("e164:          {}", number.e164);
        println!("national:      {}", number.national);
        println!("international: {}", number.international);
        println!("region:        {}", region_label(number));
    }

    match result {
        NormalizedResult::Parsed(_) => Ok(()),
        NormalizedResult::Rejected => Err(rejected(args.input)),
    }
}
