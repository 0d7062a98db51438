use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use dialnorm_core::RegionPlan;

#[derive(Debug, Args)]
pub struct RegionsArgs {}

pub fn list_regions(ctx: &Context<'_>, _args: RegionsArgs) -> Result<()> {
    let regions: Vec<&RegionPlan> = ctx.config.plan.regions().collect();

    if ctx.json {
        print_json(&regions)?;
        return Ok(());
    }

    if regions.is_empty() {
        println!("no regions");
        return Ok(());
    }

    for plan in regions {
        let lengths: Vec<String> = plan.lengths.iter().map(|len| len.to_string()).collect();
        println!(
            "{} +{} lengths {}",
            plan.code,
            plan.calling_code,
            lengths.join("/")
        );
    }
    Ok(())
}
