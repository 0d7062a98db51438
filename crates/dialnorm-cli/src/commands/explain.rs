use crate::commands::{print_json, result_summary, Context};
use crate::util::{parse_region_hint, strategy_label};
use anyhow::Result;
use clap::Args;
use dialnorm_core::AttemptOutcome;

#[derive(Debug, Args)]
pub struct ExplainArgs {
    pub input: String,
    #[arg(long, short)]
    pub region: Option<String>,
}

pub fn explain(ctx: &Context<'_>, args: ExplainArgs) -> Result<()> {
    let hint = parse_region_hint(args.region.as_deref())?;
    let explanation = ctx.engine.explain(&args.input, hint.as_ref());

    if ctx.json {
        print_json(&explanation)?;
        return Ok(());
    }

    for (index, attempt) in explanation.attempts.iter().enumerate() {
        let outcome = match &attempt.outcome {
            AttemptOutcome::ParseFailed { error } => format!("parse failed ({})", error),
            AttemptOutcome::Ambiguous {
                input_digits,
                canonical_digits,
            } => format!("ambiguous ({} != {})", input_digits, canonical_digits),
            AttemptOutcome::Accepted => "accepted".to_string(),
        };
        println!(
            "{}. {} [{}, {}]: {}",
            index + 1,
            attempt.candidate.number,
            attempt.candidate.region,
            strategy_label(&attempt.candidate.strategy),
            outcome
        );
    }
    println!("result: {}", result_summary(&explanation.result));
    Ok(())
}
